//! Variant selection by attribute matching.

use std::sync::Arc;

use depgraft_core::attributes::ImmutableAttributes;
use depgraft_core::component::{ComponentMetadata, VariantMetadata};
use depgraft_core::schema::AttributesSchema;
use depgraft_util::errors::GraftError;

/// Picks the variant of a component that a consumer should use.
///
/// Shared between all edges of a resolution, possibly across threads.
pub trait AttributeMatcher: Send + Sync {
    fn select_variant(
        &self,
        consumer_attributes: &ImmutableAttributes,
        target_component: &ComponentMetadata,
        schema: &AttributesSchema,
    ) -> Result<Arc<VariantMetadata>, GraftError>;
}

/// Matches using the compatibility and preference rules of the consumer's schema.
///
/// A variant is compatible when every consumer attribute it declares has an
/// equal or schema-compatible value. Several compatible variants are narrowed
/// to those with the most exact matches, then by each attribute's `prefer` order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaAttributeMatcher;

impl SchemaAttributeMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl AttributeMatcher for SchemaAttributeMatcher {
    fn select_variant(
        &self,
        consumer_attributes: &ImmutableAttributes,
        target_component: &ComponentMetadata,
        schema: &AttributesSchema,
    ) -> Result<Arc<VariantMetadata>, GraftError> {
        let compatible: Vec<&Arc<VariantMetadata>> = target_component
            .variants
            .iter()
            .filter(|v| is_compatible(consumer_attributes, &v.attributes, schema))
            .collect();

        let candidates = match compatible.len() {
            0 => {
                return Err(GraftError::NoMatchingVariant {
                    component: target_component.id.clone(),
                    attributes: consumer_attributes.to_string(),
                })
            }
            1 => compatible,
            _ => disambiguate(consumer_attributes, compatible, schema),
        };

        match candidates.as_slice() {
            [only] => {
                tracing::trace!("Selected variant {} of {}", only.name, target_component.id);
                Ok(Arc::clone(only))
            }
            _ => {
                let names: Vec<String> = candidates.iter().map(|v| v.name.clone()).collect();
                tracing::debug!(
                    "Ambiguous variants of {}: {}",
                    target_component.id,
                    names.join(", ")
                );
                Err(GraftError::AmbiguousVariant {
                    component: target_component.id.clone(),
                    candidates: names,
                })
            }
        }
    }
}

fn is_compatible(
    consumer: &ImmutableAttributes,
    producer: &ImmutableAttributes,
    schema: &AttributesSchema,
) -> bool {
    consumer.iter().all(|(name, requested)| match producer.get(name) {
        Some(provided) => schema.is_compatible(name, requested, provided),
        None => true,
    })
}

fn exact_matches(consumer: &ImmutableAttributes, producer: &ImmutableAttributes) -> usize {
    consumer
        .iter()
        .filter(|(name, requested)| producer.get(name) == Some(*requested))
        .count()
}

fn disambiguate<'a>(
    consumer: &ImmutableAttributes,
    mut candidates: Vec<&'a Arc<VariantMetadata>>,
    schema: &AttributesSchema,
) -> Vec<&'a Arc<VariantMetadata>> {
    let best = candidates
        .iter()
        .map(|v| exact_matches(consumer, &v.attributes))
        .max()
        .unwrap_or(0);
    candidates.retain(|v| exact_matches(consumer, &v.attributes) == best);

    for (attribute, rules) in &schema.attributes {
        if candidates.len() <= 1 {
            break;
        }
        if rules.prefer.is_empty() {
            continue;
        }
        let rank = |v: &Arc<VariantMetadata>| {
            v.attributes
                .get(attribute)
                .and_then(|value| schema.preference_rank(attribute, value))
        };
        if let Some(top) = candidates.iter().filter_map(|v| rank(*v)).min() {
            candidates.retain(|v| rank(*v) == Some(top));
        }
    }
    candidates
}
