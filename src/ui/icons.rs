pub struct Icons;

impl Icons {
    pub const BELL: &str = "🔔";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
    pub const INFO: &str = "ℹ️";
    pub const POT: &str = "🍲";
    pub const LIST: &str = "📋";
    pub const NOTE: &str = "📝";
    pub const GLOBE: &str = "🌍";
    pub const DATABASE: &str = "🗄️";
    pub const PERSON: &str = "👤";
}
