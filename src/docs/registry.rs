use crate::error::ChartResult;

/// Component registry bundled at compile time and served byte for byte.
pub const COMPONENT_REGISTRY_JSON: &str = include_str!("../../assets/component-registry.json");

/// Parsed view of the bundled registry.
pub fn component_registry() -> ChartResult<serde_json::Value> {
    Ok(serde_json::from_str(COMPONENT_REGISTRY_JSON)?)
}

/// Component names listed in the registry, sorted by name.
pub fn component_names() -> ChartResult<Vec<String>> {
    let registry = component_registry()?;
    Ok(registry
        .get("components")
        .and_then(serde_json::Value::as_object)
        .map(|components| components.keys().cloned().collect())
        .unwrap_or_default())
}
