//! Environment source: DISPARRANGE_<SECTION>__<KEY>, e.g. DISPARRANGE_TOOL__COMMAND=xrandr

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

/// Add the environment override layer to the builder.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("DISPARRANGE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}
