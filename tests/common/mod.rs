#![allow(dead_code)]

pub mod temp_files {
    use std::path::{Path, PathBuf};

    /// Petstore-style document shared by the integration tests
    pub const PETS_YAML: &str = r#"openapi: 3.0.3
info:
  title: Pet Store
  version: "1.0.0"
servers:
  - url: https://example.com/api
paths:
  /pets/{petId}:
    parameters:
      - name: petId
        in: path
        required: true
        schema: { type: string }
    get:
      operationId: get_pet
      responses:
        200:
          description: A pet
    post:
      operationId: update_pet
      responses:
        "204":
          description: Updated
  /health:
    get:
      responses:
        "200":
          description: OK
"#;

    /// Same document as [`PETS_YAML`] in JSON
    pub const PETS_JSON: &str = r#"{
  "openapi": "3.0.3",
  "info": { "title": "Pet Store", "version": "1.0.0" },
  "paths": {
    "/health": { "get": { "responses": { "200": { "description": "OK" } } } },
    "/pets/{petId}": {
      "post": { "operationId": "update_pet" },
      "get": { "operationId": "get_pet" },
      "parameters": [ { "name": "petId", "in": "path", "required": true } ]
    }
  }
}"#;

    /// Write `content` to `name` inside `dir` and return the path
    pub fn write_spec(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }
}
