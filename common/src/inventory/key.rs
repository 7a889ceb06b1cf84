use std::fmt;

/// Grouping key shared by asset and deployment records.
///
/// Kept as three separate fields so that values containing `_` never collide the way
/// an underscore-joined string would.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeploymentKey {
    pub application: String,
    pub service: String,
    pub instance: String,
}

impl DeploymentKey {
    pub fn new(
        application: impl Into<String>,
        service: impl Into<String>,
        instance: impl Into<String>,
    ) -> Self {
        Self {
            application: application.into(),
            service: service.into(),
            instance: instance.into(),
        }
    }
}

/// Renders the legacy `application_service_instance` form. Only meant for diagnostics.
impl fmt::Display for DeploymentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.application, self.service, self.instance)
    }
}
