use super::render;
use crate::names::ResourceName;

const CONTROLLER: &str = r#"
export const testHandler = (req, res) => {
  console.log('hello {{name}}');
  res.json({ message: 'hello {{name}}' });
};
"#;

const ROUTE: &str = r#"
import { Router } from 'express';
import { testHandler } from '../controllers/{{name}}.js';

const router = Router();

router.get('/test', testHandler);

export default router;
"#;

/// `src/controllers/{name}.js`
pub fn controller(name: &ResourceName) -> String {
    render(CONTROLLER, &[("name", name.as_str())])
}

/// `src/routes/{name}.js`
pub fn route(name: &ResourceName) -> String {
    render(ROUTE, &[("name", name.as_str())])
}
