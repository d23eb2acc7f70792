use serde::{Deserialize, Serialize};

/// CPU architecture inferred from the user-agent string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Architecture {
    /// ARM / AArch64
    Arm,
    /// x86-64 (including win64/wow64/amd64 tokens)
    X86_64,
}

impl std::fmt::Display for Architecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arm => write!(f, "arm"),
            Self::X86_64 => write!(f, "x86_64"),
        }
    }
}

/// Hardware hints exposed by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hardware {
    /// Operating system name and version parsed from the user agent
    pub os: String,

    /// Logical CPU core count; 0 is the documented "unknown" sentinel
    #[serde(default)]
    pub cpu_cores: u32,

    /// Device memory hint in gigabytes; 0 is the documented "unknown"
    /// sentinel
    #[serde(default)]
    pub device_memory: f64,

    /// Inferred CPU architecture, when the user agent reveals one
    #[serde(default)]
    pub device_architecture: Option<Architecture>,
}

impl Default for Hardware {
    fn default() -> Self {
        Self {
            os: "Unknown".to_string(),
            cpu_cores: 0,
            device_memory: 0.0,
            device_architecture: None,
        }
    }
}
