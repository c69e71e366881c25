use std::collections::BTreeMap;

use serde::Serialize;

use super::render;
use crate::commands::new_project::NewProjectOptions;

pub const ENV_FILE: &str = "PORT=8080\n";
pub const GITIGNORE: &str = "node_modules\n.env\n";

const APP_JS: &str = r#"
import express from 'express';
import cors from 'cors';
import routes from './routes/index.js';

const app = express();
app.use(cors());
app.use(express.json());
app.use('/api', routes);

export default app;
"#;

const SERVER_JS: &str = r#"
import app from './app.js';

const port = process.env.PORT || 8080;
app.listen(port, () => console.log(`Server running on port ${port}`));
"#;

const ROUTES_INDEX_JS: &str = r#"
import { Router } from 'express';
const router = Router();
export default router;
"#;

const FIREBASE_JS: &str = r#"
import { initializeApp } from 'firebase-admin/app';
import { getFirestore } from 'firebase-admin/firestore';

// You can also store the path to your service account json file in .env
// GOOGLE_APPLICATION_CREDENTIALS=./service-account.json
initializeApp();

export const db = getFirestore();
"#;

pub fn app_js() -> String {
    render(APP_JS, &[])
}

pub fn server_js() -> String {
    render(SERVER_JS, &[])
}

/// Router-aggregator file in the exact shape the router patcher expects.
pub fn routes_index_js() -> String {
    render(ROUTES_INDEX_JS, &[])
}

pub fn firebase_js() -> String {
    render(FIREBASE_JS, &[])
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PackageJson<'a> {
    name: &'a str,
    version: &'static str,
    #[serde(rename = "type")]
    module_type: &'static str,
    scripts: BTreeMap<&'static str, &'static str>,
    dependencies: BTreeMap<&'static str, &'static str>,
    dev_dependencies: BTreeMap<&'static str, &'static str>,
}

pub fn package_json(opts: &NewProjectOptions) -> Result<String, serde_json::Error> {
    let mut dependencies = BTreeMap::from([("express", "^4.18.2"), ("cors", "^2.8.5")]);
    if opts.firebase {
        dependencies.insert("firebase-admin", "^11.11.0");
    }

    let manifest = PackageJson {
        name: &opts.name,
        version: "1.0.0",
        module_type: "module",
        scripts: BTreeMap::from([
            ("start", "node src/server.js"),
            ("dev", "nodemon src/server.js"),
        ]),
        dependencies,
        dev_dependencies: BTreeMap::from([("nodemon", "^2.0.20")]),
    };

    let mut json = serde_json::to_string_pretty(&manifest)?;
    json.push('\n');
    Ok(json)
}
