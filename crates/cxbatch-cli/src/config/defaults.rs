pub struct DefaultsConfig {
    pub manifest: String,
    pub variant: String,
    pub group_a: String,
    pub group_b: String,
    pub host_url: String,
    pub timeout_secs: u64,
    pub custom_plan_name: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            manifest: "all_Relaxed_files.txt".to_string(),
            variant: "interface-contact".to_string(),
            group_a: "A".to_string(),
            group_b: "B".to_string(),
            host_url: "http://127.0.0.1:60000".to_string(),
            timeout_secs: 300,
            custom_plan_name: "custom".to_string(),
        }
    }
}
