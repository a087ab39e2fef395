use depgraft_core::exclude::ExcludeRule;
use depgraft_core::selector::{ComponentSelector, ModuleSelector, ProjectSelector};
use depgraft_resolver::{DependencyEdge, DependencyMetadata, Edge};

fn declared() -> DependencyEdge {
    DependencyEdge::new(
        ModuleSelector::of("org.example", "core", "1.0"),
        vec![ExcludeRule::group("junit")],
        true,
        Some("substituted by included build".to_string()),
    )
}

fn project() -> ProjectSelector {
    ProjectSelector::new(":platform", ":core")
}

#[test]
fn with_target_project_wraps_original_edge() {
    let edge = declared();
    let retargeted = edge.with_target(project().into());

    let Edge::Project(adapter) = &retargeted else {
        panic!("expected a project edge");
    };
    assert!(adapter.delegate().same_instance(&edge));
    assert_eq!(adapter.project_selector(), &project());
    assert_eq!(retargeted.selector(), ComponentSelector::Project(project()));
}

#[test]
fn adapter_forwards_edge_properties() {
    let edge = declared();
    let adapter = edge.with_target(project().into());

    assert_eq!(adapter.excludes(), edge.excludes());
    assert_eq!(adapter.is_constraint(), edge.is_constraint());
    assert_eq!(adapter.reason(), edge.reason());
    assert_eq!(adapter.artifacts(), edge.artifacts());
    assert!(adapter.artifacts().is_empty());
    assert!(!adapter.is_changing());
    assert!(adapter.is_transitive());
}

#[test]
fn retarget_to_same_project_keeps_adapter() {
    let adapter = declared().with_target(project().into());
    let again = adapter.with_target(project().into());
    let (Edge::Project(first), Edge::Project(second)) = (&adapter, &again) else {
        panic!("expected project edges");
    };
    assert!(first.delegate().same_instance(second.delegate()));
    assert_eq!(first.project_selector(), second.project_selector());
}

#[test]
fn retarget_to_other_project_wraps_declared_edge() {
    let edge = declared();
    let other = ProjectSelector::root_build(":core-jvm");
    let redirected = edge
        .with_target(project().into())
        .with_target(other.clone().into());

    let Edge::Project(adapter) = redirected else {
        panic!("expected a project edge");
    };
    assert_eq!(adapter.project_selector(), &other);
    assert!(adapter.delegate().same_instance(&edge));
}

#[test]
fn retarget_back_to_module_restores_module_edge() {
    let edge = declared();
    let module = ModuleSelector::of("org.example", "core", "1.1");
    let back = edge
        .with_target(project().into())
        .with_target(module.clone().into());

    let Edge::Module(restored) = back else {
        panic!("expected a module edge");
    };
    assert_eq!(restored.module_selector(), &module);
    assert_eq!(restored.excludes(), edge.excludes());
    assert!(restored.is_constraint());
    assert_eq!(restored.reason(), Some("substituted by included build"));
}

#[test]
fn adapter_debug_string_includes_project() {
    let adapter = declared().with_target(project().into());
    assert_eq!(adapter.to_string(), "ProjectDependencyEdge: project :platform:core");
}
