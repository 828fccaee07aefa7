/// Implements the shared builder options for a node struct with a
/// `name: String` field. The `config` form additionally covers nodes that
/// read thresholds from a `config: BehaviorConfig` field.
macro_rules! node_options {
    ($ty:ident) => {
        impl $ty {
            /// Overrides the default node name.
            pub fn with_name(mut self, name: impl Into<String>) -> Self {
                self.name = name.into();
                self
            }
        }
    };
    ($ty:ident, config) => {
        $crate::macros::node_options!($ty);

        impl $ty {
            /// Overrides the default numeric thresholds.
            pub fn with_config(mut self, config: $crate::config::BehaviorConfig) -> Self {
                self.config = config;
                self
            }

            pub fn config(&self) -> &$crate::config::BehaviorConfig {
                &self.config
            }
        }
    };
}

pub(crate) use node_options;
