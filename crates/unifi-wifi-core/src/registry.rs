// ── Coordinator registry ──
//
// Ordered name -> coordinator lookup for the service layer. Insertion
// order follows configuration order; names must be unique.

use indexmap::IndexMap;
use tracing::debug;

use crate::config::ControllerConfig;
use crate::coordinator::Coordinator;
use crate::error::CoreError;

/// Ordered collection of coordinators keyed by configured name.
pub struct CoordinatorRegistry {
    coordinators: IndexMap<String, Coordinator>,
}

impl CoordinatorRegistry {
    /// Build one coordinator per config, in order.
    ///
    /// Duplicate names are a configuration error -- the name is the only
    /// handle the service layer has.
    pub fn new(configs: Vec<ControllerConfig>) -> Result<Self, CoreError> {
        let mut coordinators = IndexMap::with_capacity(configs.len());
        for config in configs {
            let name = config.name.clone();
            if coordinators.contains_key(&name) {
                return Err(CoreError::DuplicateController { name });
            }
            debug!(controller = %name, "registering coordinator");
            coordinators.insert(name, Coordinator::new(config)?);
        }
        Ok(Self { coordinators })
    }

    /// Look up a coordinator by configured name.
    pub fn get(&self, name: &str) -> Result<&Coordinator, CoreError> {
        self.coordinators
            .get(name)
            .ok_or_else(|| CoreError::UnknownController {
                name: name.to_owned(),
            })
    }

    /// Iterate coordinators in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &Coordinator> {
        self.coordinators.values()
    }

    pub fn len(&self) -> usize {
        self.coordinators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinators.is_empty()
    }

    /// Close every coordinator's session (process shutdown).
    pub async fn shutdown(&self) {
        for coordinator in self.coordinators.values() {
            coordinator.logout().await;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;
    use url::Url;

    use super::*;

    fn config(name: &str) -> ControllerConfig {
        ControllerConfig::new(
            name,
            Url::parse("https://192.168.1.1").unwrap(),
            "admin",
            SecretString::from("pw".to_string()),
        )
    }

    #[test]
    fn lookup_by_name() {
        let registry =
            CoordinatorRegistry::new(vec![config("home"), config("office")]).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("office").unwrap().name(), "office");
    }

    #[test]
    fn unknown_name_is_config_error() {
        let registry = CoordinatorRegistry::new(vec![config("home")]).unwrap();
        assert!(matches!(
            registry.get("garage"),
            Err(CoreError::UnknownController { .. })
        ));
    }

    #[test]
    fn duplicate_names_rejected() {
        let result = CoordinatorRegistry::new(vec![config("home"), config("home")]);
        assert!(matches!(
            result,
            Err(CoreError::DuplicateController { .. })
        ));
    }

    #[test]
    fn iteration_preserves_configuration_order() {
        let registry =
            CoordinatorRegistry::new(vec![config("b"), config("a"), config("c")]).unwrap();
        let names: Vec<&str> = registry.iter().map(Coordinator::name).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }
}
