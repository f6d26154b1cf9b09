use prisma_forge_core::builders::{
    self, DataSourceConfig, EnumConfig, GeneratorConfig, ModelConfig, ObjectFieldConfig,
    ScalarFieldConfig, SchemaConfig,
};
use prisma_forge_core::types::{
    DataSourceProvider, DataSourceUrl, DefaultFunction, DefaultValue, Field, Model, ScalarType,
    Schema,
};
use prisma_forge_dsl::{print, print_generator, print_raw, FormatError, Reformatter};

fn string_field() -> Field {
    builders::scalar_field(
        ScalarFieldConfig::new("exampleFieldName", ScalarType::String).required(),
    )
    .unwrap()
}

fn model_named(name: &str) -> Model {
    builders::model(ModelConfig::new(name, vec![string_field()])).unwrap()
}

async fn render(schema: &Schema) -> String {
    print(schema, &Reformatter::default()).await.unwrap()
}

/// A small blog schema exercising every statement kind.
fn blog_schema() -> Schema {
    let user_fields = vec![
        builders::scalar_field(
            ScalarFieldConfig::new("id", ScalarType::Int)
                .required()
                .id()
                .with_default(DefaultValue::call(DefaultFunction::AutoIncrement)),
        )
        .unwrap(),
        builders::scalar_field(
            ScalarFieldConfig::new("email", ScalarType::String)
                .required()
                .unique(),
        )
        .unwrap(),
        builders::scalar_field(ScalarFieldConfig::new("name", ScalarType::String)).unwrap(),
        builders::object_field(ObjectFieldConfig::new("posts", "Post").required().list())
            .unwrap(),
    ];
    let post_fields = vec![
        builders::scalar_field(
            ScalarFieldConfig::new("id", ScalarType::Int)
                .required()
                .id()
                .with_default(DefaultValue::call(DefaultFunction::AutoIncrement)),
        )
        .unwrap(),
        builders::scalar_field(ScalarFieldConfig::new("title", ScalarType::String).required())
            .unwrap(),
        builders::scalar_field(
            ScalarFieldConfig::new("published", ScalarType::Boolean)
                .required()
                .with_default(DefaultValue::boolean(false)),
        )
        .unwrap(),
        builders::object_field(
            ObjectFieldConfig::new("author", "User")
                .required()
                .with_relation_fields(vec!["authorId".into()])
                .with_relation_references(vec!["id".into()]),
        )
        .unwrap(),
        builders::scalar_field(ScalarFieldConfig::new("authorId", ScalarType::Int).required())
            .unwrap(),
        builders::scalar_field(
            ScalarFieldConfig::new("createdAt", ScalarType::DateTime)
                .required()
                .with_default(DefaultValue::call(DefaultFunction::Now)),
        )
        .unwrap(),
    ];

    let user = builders::model(
        ModelConfig::new("User", user_fields).with_documentation("Registered accounts"),
    )
    .unwrap();
    let post = builders::model(ModelConfig::new("Post", post_fields)).unwrap();
    let role =
        builders::enumeration(EnumConfig::new("Role", vec!["USER".into(), "ADMIN".into()]))
            .unwrap();
    let db = builders::data_source(DataSourceConfig::new(
        "db",
        DataSourceProvider::PostgreSql,
        DataSourceUrl::Env("DATABASE_URL".into()),
    ))
    .unwrap();
    let client = builders::generator(GeneratorConfig::new("client", "prisma-client-js")).unwrap();

    builders::schema(
        SchemaConfig::new(vec![user, post], vec![role])
            .with_data_source(db)
            .with_generators(vec![client]),
    )
}

const BLOG_SDL: &str = r#"datasource db {
  provider = "postgresql"
  url      = env("DATABASE_URL")
}

generator client {
  provider = "prisma-client-js"
}

/// Registered accounts
model User {
  id    Int     @id @default(autoincrement())
  email String  @unique
  name  String?
  posts Post[]
}

model Post {
  id        Int      @id @default(autoincrement())
  title     String
  published Boolean  @default(false)
  author    User     @relation(fields: [authorId], references: [id])
  authorId  Int
  createdAt DateTime @default(now())
}

enum Role {
  USER
  ADMIN
}
"#;

#[tokio::test]
async fn simple_model() {
    let schema = builders::schema(SchemaConfig::new(vec![model_named("ExampleModelName")], vec![]));
    assert_eq!(
        render(&schema).await,
        "model ExampleModelName {\n  exampleFieldName String\n}\n"
    );
}

#[tokio::test]
async fn two_models() {
    let schema = builders::schema(SchemaConfig::new(
        vec![model_named("ExampleModelName"), model_named("Order")],
        vec![],
    ));
    assert_eq!(
        render(&schema).await,
        "model ExampleModelName {\n  exampleFieldName String\n}\n\nmodel Order {\n  exampleFieldName String\n}\n"
    );
}

#[tokio::test]
async fn single_datasource() {
    let db = builders::data_source(DataSourceConfig::new(
        "exampleDataSource",
        DataSourceProvider::MySql,
        DataSourceUrl::Literal("mysql://example.com".into()),
    ))
    .unwrap();
    let schema = builders::schema(SchemaConfig::default().with_data_source(db));
    assert_eq!(
        render(&schema).await,
        "datasource exampleDataSource {\n  provider = \"mysql\"\n  url      = \"mysql://example.com\"\n}\n"
    );
}

#[tokio::test]
async fn single_generator() {
    let generator = builders::generator(GeneratorConfig::new(
        "exampleGeneratorName",
        "exampleGeneratorProvider",
    ))
    .unwrap();
    let expected = format!("{}\n", print_generator(&generator));
    let schema = builders::schema(SchemaConfig::default().with_generators(vec![generator]));
    assert_eq!(render(&schema).await, expected);
}

#[tokio::test]
async fn single_enum() {
    let role = builders::enumeration(EnumConfig::new(
        "ExampleEnumName",
        vec!["ExampleEnumValue".into()],
    ))
    .unwrap();
    let schema = builders::schema(SchemaConfig::new(vec![], vec![role]));
    assert_eq!(
        render(&schema).await,
        "enum ExampleEnumName {\n  ExampleEnumValue\n}\n"
    );
}

#[tokio::test]
async fn empty_schema_renders_empty() {
    let schema = builders::schema(SchemaConfig::default());
    assert_eq!(render(&schema).await, "");
}

#[tokio::test]
async fn blog_schema_renders_canonically() {
    assert_eq!(render(&blog_schema()).await, BLOG_SDL);
}

#[tokio::test]
async fn rendered_output_is_a_fixed_point() {
    let once = render(&blog_schema()).await;
    let twice = Reformatter::default().reformat(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn raw_text_keeps_statement_order() {
    let raw = print_raw(&blog_schema());
    let positions: Vec<usize> = ["datasource db", "generator client", "model User", "model Post", "enum Role"]
        .iter()
        .map(|needle| raw.find(needle).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[tokio::test]
async fn reformatter_errors_surface_through_print() {
    // An unquoted string default carrying a character the lexer rejects.
    let bad = builders::scalar_field(
        ScalarFieldConfig::new("note", ScalarType::String)
            .with_default(DefaultValue::string("#hash")),
    )
    .unwrap();
    let model = builders::model(ModelConfig::new("Note", vec![bad])).unwrap();
    let schema = builders::schema(SchemaConfig::new(vec![model], vec![]));

    let err = print(&schema, &Reformatter::default()).await.unwrap_err();
    assert!(matches!(err, FormatError::InvalidToken { line: 2, .. }));
}
