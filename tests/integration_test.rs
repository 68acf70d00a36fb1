//! Integration tests for workspace-cycles using the library interface

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use workspace_cycles::detector::{Cycle, CycleDetector};
use workspace_cycles::graph::{GraphRenderer, PackageGraphBuilder};
use workspace_cycles::reader::ManifestReader;
use workspace_cycles::reports::{JsonReportGenerator, ReportGenerator};
use workspace_cycles::workspace_discovery::WorkspaceDiscovery;

/// Package definition: (directory, name, dependencies, devDependencies)
type PackageDefinition<'a> = (&'a str, &'a str, Vec<&'a str>, Vec<&'a str>);

fn deps_object(deps: &[&str]) -> String {
    deps.iter()
        .map(|d| format!("\"{d}\": \"workspace:*\""))
        .collect::<Vec<_>>()
        .join(", ")
}

fn create_workspace(root: &Path, patterns: &[&str], packages: Vec<PackageDefinition>) {
    let patterns_json = patterns
        .iter()
        .map(|p| format!("\"{p}\""))
        .collect::<Vec<_>>()
        .join(", ");
    fs::write(
        root.join("package.json"),
        format!(r#"{{ "name": "root", "private": true, "workspaces": [{patterns_json}] }}"#),
    )
    .unwrap();

    for (dir, name, deps, dev_deps) in packages {
        let mut fields = vec![
            format!("\"name\": \"{name}\""),
            "\"version\": \"1.0.0\"".to_string(),
        ];
        if !deps.is_empty() {
            fields.push(format!("\"dependencies\": {{ {} }}", deps_object(&deps)));
        }
        if !dev_deps.is_empty() {
            fields.push(format!(
                "\"devDependencies\": {{ {} }}",
                deps_object(&dev_deps)
            ));
        }

        let package_dir = root.join(dir);
        fs::create_dir_all(&package_dir).unwrap();
        fs::write(
            package_dir.join("package.json"),
            format!("{{ {} }}", fields.join(", ")),
        )
        .unwrap();
    }
}

/// Run the full discovery -> read -> build -> detect pipeline.
fn find_cycles(root: &Path) -> Vec<Cycle> {
    let discovery = WorkspaceDiscovery::new(root);
    let manifests = discovery.member_manifests(None).unwrap();

    let reader = ManifestReader::new(root);
    let records = reader.read_all(&manifests, None).unwrap();

    let mut builder = PackageGraphBuilder::new();
    builder.build(&records, None);

    let mut detector = CycleDetector::new();
    detector.detect_cycles(builder.graph());
    detector.cycles().to_vec()
}

fn cycle_names(cycle: &Cycle) -> Vec<&str> {
    cycle.nodes().iter().map(String::as_str).collect()
}

#[test]
fn test_mutual_dependency_pair() {
    let temp = TempDir::new().unwrap();
    create_workspace(
        temp.path(),
        &["example1", "example2"],
        vec![
            ("example1", "example1", vec!["example2"], vec![]),
            ("example2", "example2", vec!["example1"], vec![]),
        ],
    );

    let cycles = find_cycles(temp.path());

    assert_eq!(cycles.len(), 1);
    assert_eq!(
        cycle_names(&cycles[0]),
        vec!["example1", "example2", "example1"]
    );
    assert_eq!(
        cycles[0].manifest_paths(),
        vec![
            PathBuf::from("example1/package.json"),
            PathBuf::from("example2/package.json"),
            PathBuf::from("example1/package.json"),
        ]
    );
}

#[test]
fn test_acyclic_workspace_has_no_cycles() {
    let temp = TempDir::new().unwrap();
    create_workspace(
        temp.path(),
        &["packages/*"],
        vec![
            ("packages/app", "app", vec!["core", "ui"], vec![]),
            ("packages/ui", "ui", vec!["core"], vec![]),
            ("packages/core", "core", vec![], vec![]),
        ],
    );

    assert_eq!(find_cycles(temp.path()), Vec::<Cycle>::new());
}

#[test]
fn test_workspace_without_dependencies() {
    let temp = TempDir::new().unwrap();
    create_workspace(
        temp.path(),
        &["packages/*"],
        vec![
            ("packages/one", "one", vec![], vec![]),
            ("packages/two", "two", vec![], vec![]),
            ("packages/three", "three", vec![], vec![]),
        ],
    );

    assert_eq!(find_cycles(temp.path()), Vec::<Cycle>::new());
}

#[test]
fn test_nine_package_ring() {
    let temp = TempDir::new().unwrap();
    create_workspace(
        temp.path(),
        &["packages/*"],
        vec![
            ("packages/one", "one", vec!["two"], vec![]),
            ("packages/two", "two", vec!["three"], vec![]),
            ("packages/three", "three", vec!["four"], vec![]),
            ("packages/four", "four", vec!["five"], vec![]),
            ("packages/five", "five", vec!["six"], vec![]),
            ("packages/six", "six", vec!["seven"], vec![]),
            ("packages/seven", "seven", vec!["eight"], vec![]),
            ("packages/eight", "eight", vec!["nine"], vec![]),
            ("packages/nine", "nine", vec!["one"], vec![]),
        ],
    );

    let cycles = find_cycles(temp.path());

    assert_eq!(cycles.len(), 1);
    // DFS roots are sorted, so the ring is entered at "eight".
    assert_eq!(
        cycle_names(&cycles[0]),
        vec!["eight", "nine", "one", "two", "three", "four", "five", "six", "seven", "eight"]
    );
}

#[test]
fn test_small_ring_inside_larger_workspace() {
    let temp = TempDir::new().unwrap();
    create_workspace(
        temp.path(),
        &["packages/*"],
        vec![
            ("packages/a", "a", vec!["b"], vec![]),
            ("packages/b", "b", vec!["c"], vec![]),
            ("packages/c", "c", vec![], vec![]),
            ("packages/d", "d", vec!["e"], vec![]),
            ("packages/e", "e", vec!["f"], vec![]),
            ("packages/f", "f", vec!["d"], vec![]),
            ("packages/g", "g", vec!["a"], vec![]),
        ],
    );

    let cycles = find_cycles(temp.path());

    assert_eq!(cycles.len(), 1);
    assert_eq!(cycle_names(&cycles[0]), vec!["d", "e", "f", "d"]);
    assert_eq!(
        cycles[0].manifest_paths(),
        vec![
            PathBuf::from("packages/d/package.json"),
            PathBuf::from("packages/e/package.json"),
            PathBuf::from("packages/f/package.json"),
            PathBuf::from("packages/d/package.json"),
        ]
    );
}

#[test]
fn test_multiple_disjoint_cycles() {
    let temp = TempDir::new().unwrap();
    create_workspace(
        temp.path(),
        &["packages/*"],
        vec![
            ("packages/a", "a", vec!["b"], vec![]),
            ("packages/b", "b", vec!["c"], vec![]),
            ("packages/c", "c", vec!["a"], vec![]),
            ("packages/d", "d", vec!["e"], vec![]),
            ("packages/e", "e", vec!["f"], vec![]),
            ("packages/f", "f", vec!["g"], vec![]),
            ("packages/g", "g", vec!["d"], vec![]),
        ],
    );

    let cycles = find_cycles(temp.path());

    assert_eq!(cycles.len(), 2);
    assert_eq!(cycle_names(&cycles[0]), vec!["a", "b", "c", "a"]);
    assert_eq!(
        cycles[0].manifest_paths(),
        vec![
            PathBuf::from("packages/a/package.json"),
            PathBuf::from("packages/b/package.json"),
            PathBuf::from("packages/c/package.json"),
            PathBuf::from("packages/a/package.json"),
        ]
    );
    assert_eq!(cycle_names(&cycles[1]), vec!["d", "e", "f", "g", "d"]);
}

#[test]
fn test_dev_dependency_closes_a_cycle() {
    let temp = TempDir::new().unwrap();
    create_workspace(
        temp.path(),
        &["packages/*"],
        vec![
            ("packages/core", "core", vec![], vec!["app"]),
            ("packages/app", "app", vec!["core"], vec![]),
        ],
    );

    let cycles = find_cycles(temp.path());

    assert_eq!(cycles.len(), 1);
    assert_eq!(cycle_names(&cycles[0]), vec!["app", "core", "app"]);
}

#[test]
fn test_external_dependencies_do_not_create_cycles() {
    let temp = TempDir::new().unwrap();
    create_workspace(
        temp.path(),
        &["packages/*"],
        vec![
            (
                "packages/app",
                "app",
                vec!["core", "react", "left-pad"],
                vec!["jest"],
            ),
            ("packages/core", "core", vec!["lodash"], vec![]),
        ],
    );

    assert_eq!(find_cycles(temp.path()), Vec::<Cycle>::new());
}

#[test]
fn test_json_report_end_to_end() {
    let temp = TempDir::new().unwrap();
    create_workspace(
        temp.path(),
        &["example1", "example2"],
        vec![
            ("example1", "example1", vec!["example2"], vec![]),
            ("example2", "example2", vec!["example1"], vec![]),
        ],
    );

    let discovery = WorkspaceDiscovery::new(temp.path());
    let manifests = discovery.member_manifests(None).unwrap();
    let reader = ManifestReader::new(temp.path());
    let records = reader.read_all(&manifests, None).unwrap();
    let mut builder = PackageGraphBuilder::new();
    builder.build(&records, None);
    let mut detector = CycleDetector::new();
    detector.detect_cycles(builder.graph());

    let report = JsonReportGenerator::new()
        .generate_report(&detector)
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&report).unwrap();

    assert_eq!(json["has_cycles"], true);
    assert_eq!(json["cycle_count"], 1);
    assert_eq!(
        json["cycles"][0]["nodes"],
        serde_json::json!(["example1", "example2", "example1"])
    );
    assert_eq!(
        json["cycles"][0]["files"],
        serde_json::json!([
            "example1/package.json",
            "example2/package.json",
            "example1/package.json",
        ])
    );
}

#[test]
fn test_graph_rendering_end_to_end() {
    let temp = TempDir::new().unwrap();
    create_workspace(
        temp.path(),
        &["packages/*"],
        vec![
            ("packages/a", "a", vec!["b"], vec![]),
            ("packages/b", "b", vec!["a"], vec![]),
            ("packages/c", "c", vec!["a"], vec![]),
        ],
    );

    let discovery = WorkspaceDiscovery::new(temp.path());
    let manifests = discovery.member_manifests(None).unwrap();
    let reader = ManifestReader::new(temp.path());
    let records = reader.read_all(&manifests, None).unwrap();
    let mut builder = PackageGraphBuilder::new();
    builder.build(&records, None);
    let mut detector = CycleDetector::new();
    detector.detect_cycles(builder.graph());

    let renderer = GraphRenderer::new(true);

    let mut dot = Vec::new();
    renderer
        .render_dot(builder.graph(), detector.cycles(), &mut dot)
        .unwrap();
    let dot = String::from_utf8(dot).unwrap();
    assert!(dot.contains("digraph workspace_dependencies"));
    assert!(dot.contains("subgraph cluster_0"));
    assert!(dot.contains("\"a\" -> \"b\""));

    let mut mermaid = Vec::new();
    renderer
        .render_mermaid(builder.graph(), detector.cycles(), &mut mermaid)
        .unwrap();
    let mermaid = String::from_utf8(mermaid).unwrap();
    assert!(mermaid.contains("graph TD"));
    assert!(mermaid.contains("classDef cycle"));
}

#[test]
fn test_detection_is_deterministic_across_runs() {
    let temp = TempDir::new().unwrap();
    create_workspace(
        temp.path(),
        &["packages/*"],
        vec![
            ("packages/a", "a", vec!["b"], vec![]),
            ("packages/b", "b", vec!["a", "c"], vec![]),
            ("packages/c", "c", vec!["b"], vec![]),
        ],
    );

    let first = find_cycles(temp.path());
    let second = find_cycles(temp.path());

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}
