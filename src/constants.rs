pub const INIT_ACTION_TYPE: &str = "@@reducer-factory/INIT";
pub const REDUCER_ERROR_SERDE_CODE: u32 = 1;
pub const REDUCER_ERROR_PAYLOAD_CODE: u32 = 2;
