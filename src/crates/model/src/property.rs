/// 最近一次成功扫描的时间（毫秒时间戳字符串）
pub const PROP_LAST_SCAN: &str = "LastScan";

/// 从未扫描过时 LastScan 的默认值
pub const NEVER_SCANNED: &str = "-1";
