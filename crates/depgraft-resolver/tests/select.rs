use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use depgraft_core::attributes::ImmutableAttributes;
use depgraft_core::component::{ComponentMetadata, VariantMetadata};
use depgraft_core::schema::AttributesSchema;
use depgraft_core::selector::{ModuleSelector, ProjectSelector};
use depgraft_resolver::{AttributeMatcher, DependencyEdge, DependencyMetadata, SchemaAttributeMatcher};
use depgraft_util::errors::GraftError;

/// Always answers with the named variant and counts how often it was asked.
struct FakeMatcher {
    variant: &'static str,
    calls: AtomicUsize,
}

impl FakeMatcher {
    fn new(variant: &'static str) -> Self {
        Self {
            variant,
            calls: AtomicUsize::new(0),
        }
    }
}

impl AttributeMatcher for FakeMatcher {
    fn select_variant(
        &self,
        _consumer_attributes: &ImmutableAttributes,
        target_component: &ComponentMetadata,
        _schema: &AttributesSchema,
    ) -> Result<Arc<VariantMetadata>, GraftError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        target_component
            .variant(self.variant)
            .cloned()
            .ok_or_else(|| GraftError::NoMatchingVariant {
                component: target_component.id.clone(),
                attributes: String::new(),
            })
    }
}

fn component() -> ComponentMetadata {
    ComponentMetadata::new("org.example:lib:1.0")
        .with_variant("apiElements", ImmutableAttributes::of([("usage", "java-api")]))
        .with_variant("runtimeElements", ImmutableAttributes::of([("usage", "java-runtime")]))
        .with_variant("sourcesElements", ImmutableAttributes::of([("category", "documentation")]))
}

fn edge() -> DependencyEdge {
    DependencyEdge::new(ModuleSelector::of("org.example", "lib", "1.0"), vec![], false, None)
}

#[test]
fn returns_exactly_the_matcher_choice() {
    let component = component();
    let matcher = FakeMatcher::new("sourcesElements");
    let selected = edge()
        .select_configurations(
            &ImmutableAttributes::of([("usage", "java-api")]),
            &component,
            &AttributesSchema::default(),
            &matcher,
        )
        .unwrap();

    assert_eq!(selected.len(), 1);
    assert!(Arc::ptr_eq(&selected[0], &component.variants[2]));
    assert_eq!(matcher.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn matcher_errors_propagate() {
    let matcher = FakeMatcher::new("missing");
    let err = edge()
        .select_configurations(
            &ImmutableAttributes::empty(),
            &component(),
            &AttributesSchema::default(),
            &matcher,
        )
        .unwrap_err();
    assert!(matches!(err, GraftError::NoMatchingVariant { .. }));
}

#[test]
fn project_edge_selects_through_declared_edge() {
    let component = component();
    let matcher = FakeMatcher::new("apiElements");
    let adapter = edge().with_target(ProjectSelector::root_build(":lib").into());
    let selected = adapter
        .select_configurations(
            &ImmutableAttributes::empty(),
            &component,
            &AttributesSchema::default(),
            &matcher,
        )
        .unwrap();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].name, "apiElements");
}

#[test]
fn default_matcher_single_selection() {
    let schema = AttributesSchema::from_toml_str(
        r#"
        [attributes.usage]
        compatible = { "java-api" = ["java-runtime"] }
        "#,
    )
    .unwrap();
    let selected = edge()
        .select_configurations(
            &ImmutableAttributes::of([("usage", "java-api")]),
            &component(),
            &schema,
            &SchemaAttributeMatcher::new(),
        )
        .unwrap();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].name, "apiElements");
}

#[test]
fn shared_matcher_used_concurrently() {
    let component = component();
    let matcher = FakeMatcher::new("runtimeElements");
    let schema = AttributesSchema::default();
    let edges: Vec<DependencyEdge> = (0..8).map(|_| edge()).collect();

    std::thread::scope(|scope| {
        for edge in &edges {
            let (component, matcher, schema) = (&component, &matcher, &schema);
            scope.spawn(move || {
                let selected = edge
                    .select_configurations(&ImmutableAttributes::empty(), component, schema, matcher)
                    .unwrap();
                assert_eq!(selected[0].name, "runtimeElements");
            });
        }
    });
    assert_eq!(matcher.calls.load(Ordering::SeqCst), 8);
}
