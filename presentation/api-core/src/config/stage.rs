/// Deployment stage named by `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentStage {
    Local,
    Dev,
    Prod,
    /// Unset or unrecognised.
    Unspecified,
}

/// What the middleware chain exposes in a given stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagePosture {
    /// API documentation served, no authentication gate.
    Documented,
    /// Authentication gate installed, documentation not registered.
    Guarded,
}

impl DeploymentStage {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("local") => DeploymentStage::Local,
            Some("dev") => DeploymentStage::Dev,
            Some("prod") => DeploymentStage::Prod,
            _ => DeploymentStage::Unspecified,
        }
    }

    /// An unrecognised stage is treated like production.
    pub fn posture(self) -> StagePosture {
        match self {
            DeploymentStage::Local | DeploymentStage::Dev => StagePosture::Documented,
            DeploymentStage::Prod | DeploymentStage::Unspecified => StagePosture::Guarded,
        }
    }
}

impl std::fmt::Display for DeploymentStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeploymentStage::Local => write!(f, "local"),
            DeploymentStage::Dev => write!(f, "dev"),
            DeploymentStage::Prod => write!(f, "prod"),
            DeploymentStage::Unspecified => write!(f, "unspecified"),
        }
    }
}
