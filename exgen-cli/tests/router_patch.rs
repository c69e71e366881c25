use exgen_cli::error::{Anchor, PatchError};
use exgen_cli::router::{self, patch, EXPORT_STATEMENT, ROUTER_DECLARATION};

const FRESH: &str = "import { Router } from 'express';\nconst router = Router();\nexport default router;\n";

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

fn line_of(text: &str, needle: &str) -> usize {
    text.lines()
        .position(|line| line.contains(needle))
        .unwrap_or_else(|| panic!("{needle:?} not found in:\n{text}"))
}

// ── Import insertion ────────────────────────────────────────────────

#[test]
fn fresh_router_gets_import_and_mount() {
    let patched = patch(FRESH, "user").unwrap();
    assert_eq!(
        patched,
        "import { Router } from 'express';\n\
         import userRoutes from './user.js';\n\
         const router = Router();\n\
         router.use('/user', userRoutes);\n\
         export default router;\n"
    );
}

#[test]
fn import_is_idempotent() {
    let once = patch(FRESH, "user").unwrap();
    let twice = patch(&once, "user").unwrap();
    assert_eq!(count(&twice, "import userRoutes"), 1);
}

#[test]
fn import_goes_after_last_import() {
    let source = "import { Router } from 'express';\n\
                  import authRoutes from './auth.js';\n\
                  \n\
                  const router = Router();\n\
                  export default router;\n";
    let patched = patch(source, "user").unwrap();
    assert_eq!(line_of(&patched, "import authRoutes"), 1);
    assert_eq!(line_of(&patched, "import userRoutes"), 2);
    assert_eq!(line_of(&patched, ROUTER_DECLARATION), 4);
}

#[test]
fn no_import_lines_inserts_at_start() {
    let source = "const router = Router();\nexport default router;\n";
    let patched = patch(source, "user").unwrap();
    assert!(patched.starts_with("import userRoutes from './user.js';\n"));
    assert_eq!(patched.find("import userRoutes"), Some(0));
}

#[test]
fn source_without_trailing_newline() {
    let source = "import { Router } from 'express';\nconst router = Router();\nexport default router;";
    let patched = patch(source, "post").unwrap();
    assert_eq!(
        patched,
        "import { Router } from 'express';\n\
         import postRoutes from './post.js';\n\
         const router = Router();\n\
         router.use('/post', postRoutes);\n\
         export default router;"
    );
}

#[test]
fn similar_binding_does_not_block_import() {
    let source = "import userProfileRoutes from './userProfile.js';\n\
                  const router = Router();\n\
                  router.use('/userProfile', userProfileRoutes);\n\
                  export default router;\n";
    let patched = patch(source, "user").unwrap();
    assert_eq!(count(&patched, "import userRoutes from './user.js';"), 1);
    assert_eq!(count(&patched, "router.use('/user', userRoutes);"), 1);
}

#[test]
fn multi_line_import_is_not_split() {
    let source = "import {\n  Router,\n} from 'express';\nconst router = Router();\nexport default router;\n";
    let patched = patch(source, "user").unwrap();
    assert!(patched.starts_with(
        "import {\n  Router,\n} from 'express';\nimport userRoutes from './user.js';\n"
    ));
}

// ── Mount insertion ─────────────────────────────────────────────────

#[test]
fn mount_lands_between_declaration_and_export() {
    let patched = patch(FRESH, "user").unwrap();
    let declaration = line_of(&patched, ROUTER_DECLARATION);
    let mount = line_of(&patched, "router.use('/user'");
    let export = line_of(&patched, EXPORT_STATEMENT);
    assert!(declaration < mount);
    assert!(mount < export);
}

#[test]
fn repeated_patch_keeps_single_mount() {
    let once = patch(FRESH, "user").unwrap();
    let twice = patch(&once, "user").unwrap();
    assert_eq!(count(&twice, "router.use('/user', userRoutes);"), 1);
    assert_eq!(twice, once);
}

#[test]
fn repeated_plan_reports_no_change() {
    let once = patch(FRESH, "user").unwrap();
    let outcome = router::plan(&once, "user").unwrap();
    assert!(!outcome.import_added);
    assert!(!outcome.mount_added);
    assert!(!outcome.changed());
}

#[test]
fn existing_import_without_mount_gets_mount_only() {
    let source = "import userRoutes from './user.js';\nconst router = Router();\nexport default router;\n";
    let outcome = router::plan(source, "user").unwrap();
    assert!(!outcome.import_added);
    assert!(outcome.mount_added);
    assert_eq!(count(&outcome.text, "import userRoutes"), 1);
}

#[test]
fn two_resources_in_sequence() {
    let a = patch(FRESH, "a").unwrap();
    let ab = patch(&a, "b").unwrap();

    for needle in [
        "import aRoutes from './a.js';",
        "import bRoutes from './b.js';",
        "router.use('/a', aRoutes);",
        "router.use('/b', bRoutes);",
    ] {
        assert_eq!(count(&ab, needle), 1, "{needle}");
    }

    assert!(line_of(&ab, "import aRoutes") < line_of(&ab, "import bRoutes"));
    assert!(line_of(&ab, "router.use('/a'") < line_of(&ab, "router.use('/b'"));
    assert!(line_of(&ab, "router.use('/b'") < line_of(&ab, EXPORT_STATEMENT));
    assert_eq!(ab.lines().count(), 7);
}

#[test]
fn unrelated_content_is_preserved() {
    let source = "// routes\n\
                  import { Router } from 'express';\n\
                  import { requireAuth } from '../lib/auth.js';\n\
                  \n\
                  const router = Router();\n\
                  router.use(requireAuth);\n\
                  \n\
                  export default router;\n\
                  // end\n";
    let patched = patch(source, "user").unwrap();
    let removed: String = patched
        .lines()
        .filter(|line| !line.contains("userRoutes"))
        .map(|line| format!("{line}\n"))
        .collect();
    assert_eq!(removed, source);
}

#[test]
fn anchors_with_trailing_comments_are_patched() {
    let source = "import { Router } from 'express';\n\
                  const router = Router(); // main\n\
                  export default router; // api\n";
    let patched = patch(source, "user").unwrap();
    assert_eq!(
        patched,
        "import { Router } from 'express';\n\
         import userRoutes from './user.js';\n\
         const router = Router(); // main\n\
         router.use('/user', userRoutes);\n\
         export default router; // api\n"
    );
}

#[test]
fn commented_brace_after_import_is_ignored() {
    let source = "import x from 'y'; // {\nconst router = Router();\nexport default router;\n";
    let patched = patch(source, "user").unwrap();
    assert!(patched.starts_with("import x from 'y'; // {\nimport userRoutes from './user.js';\n"));
    assert_eq!(count(&patched, "router.use('/user', userRoutes);"), 1);
}

#[test]
fn multi_line_mount_is_not_duplicated() {
    let source = "import userRoutes from './user.js';\n\
                  const router = Router();\n\
                  router.use(\n  '/user',\n  userRoutes,\n);\n\
                  export default router;\n";
    assert_eq!(patch(source, "user").unwrap(), source);
}

// ── Structural errors ───────────────────────────────────────────────

#[test]
fn missing_export_is_rejected() {
    let err = patch("import { Router } from 'express';\nconst router = Router();\n", "user")
        .unwrap_err();
    assert_eq!(err, PatchError::MissingAnchor(Anchor::Export));
    assert!(err.to_string().contains("export default router;"));
}

#[test]
fn missing_declaration_is_rejected() {
    let err = patch("export default router;\n", "user").unwrap_err();
    assert_eq!(err, PatchError::MissingAnchor(Anchor::RouterDeclaration));
}

#[test]
fn empty_source_is_rejected() {
    assert!(patch("", "user").is_err());
}

#[test]
fn export_before_declaration_is_rejected() {
    let err = patch("export default router;\nconst router = Router();\n", "user").unwrap_err();
    assert!(matches!(err, PatchError::ExportBeforeDeclaration { .. }));
}
