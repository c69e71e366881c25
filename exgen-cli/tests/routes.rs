use exgen_cli::commands::generate::{self, ResourceOptions, ROUTER_FILE};
use exgen_cli::commands::new_project::{self, CliNewOpts};
use exgen_cli::commands::routes::{self, MountedRoute};
use exgen_cli::ScaffoldError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn scaffold(tmp: &TempDir) -> PathBuf {
    new_project::run(tmp.path(), "demo", CliNewOpts::default()).unwrap();
    tmp.path().join("demo")
}

#[test]
fn fresh_project_has_no_mounts() {
    let tmp = TempDir::new().unwrap();
    let root = scaffold(&tmp);

    assert!(routes::list(&root).unwrap().is_empty());
    routes::run(&root).unwrap();
}

#[test]
fn lists_generated_resources_in_order() {
    let tmp = TempDir::new().unwrap();
    let root = scaffold(&tmp);
    generate::resource(&root, "user", &ResourceOptions::default()).unwrap();
    generate::resource(&root, "post", &ResourceOptions::default()).unwrap();

    let mounted = routes::list(&root).unwrap();

    assert_eq!(
        mounted,
        vec![
            MountedRoute {
                path: "/user".into(),
                binding: "userRoutes".into(),
                module: Some("./user.js".into()),
                line: 5,
            },
            MountedRoute {
                path: "/post".into(),
                binding: "postRoutes".into(),
                module: Some("./post.js".into()),
                line: 6,
            },
        ]
    );
}

#[test]
fn mount_without_import_has_no_module() {
    let tmp = TempDir::new().unwrap();
    let root = scaffold(&tmp);
    fs::write(
        root.join(ROUTER_FILE),
        "const router = Router();\nrouter.use('/legacy', legacyRoutes);\nexport default router;\n",
    )
    .unwrap();

    let mounted = routes::list(&root).unwrap();

    assert_eq!(mounted.len(), 1);
    assert_eq!(mounted[0].path, "/legacy");
    assert_eq!(mounted[0].module, None);
}

#[test]
fn missing_router_file_fails() {
    let tmp = TempDir::new().unwrap();

    let err = routes::list(tmp.path()).unwrap_err();

    assert!(matches!(err, ScaffoldError::Io { .. }));
}
