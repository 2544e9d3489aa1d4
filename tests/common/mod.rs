#![allow(dead_code)]

pub mod fixtures {
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Blog API used across the integration tests.
    pub const BLOG_SPEC: &str = r#"
openapi: 3.1.0
info:
  title: Blog API
  version: "1.0.0"
servers:
  - url: https://blog.example.com/api
paths:
  /posts:
    get:
      operationId: list_posts
      responses:
        "200": { description: OK }
  /posts/{id}:
    get:
      operationId: post_show
      responses:
        "200": { description: OK }
  /posts/{id}/comments:
    get:
      operationId: list_post_comments
      responses:
        "200": { description: OK }
  /posts/{id}/relationships/author:
    get:
      x-handler-author: post_author_relationship
      responses:
        "200": { description: OK }
  /users/{id}:
    get:
      operationId: user_show
      responses:
        "200": { description: OK }
"#;

    pub const POST_MAPPING: &str = r#"
mapping:
  class: Acme\Domain\Post
  alias: Message
  id_properties: [postId]
  urls:
    self: post_show
    comments: list_post_comments
  relationships:
    author:
      self: post_author_relationship
      related: user_show
"#;

    pub const USER_MAPPING: &str = r#"
mapping:
  class: Acme\Domain\User
  id_properties: [userId]
  urls:
    self: user_show
"#;

    /// Scratch directory removed when dropped.
    pub struct Workspace {
        dir: TempDir,
    }

    impl Workspace {
        pub fn new() -> Self {
            Self {
                dir: tempfile::tempdir().expect("create temp dir"),
            }
        }

        pub fn write(&self, name: &str, content: &str) -> PathBuf {
            let path = self.dir.path().join(name);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).expect("create parent dir");
            }
            std::fs::write(&path, content).expect("write fixture");
            path
        }

        pub fn path(&self, name: &str) -> PathBuf {
            self.dir.path().join(name)
        }
    }
}
