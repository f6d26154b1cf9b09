use proptest::prelude::*;
use prisma_forge_core::builders::{
    self, DataSourceConfig, EnumConfig, GeneratorConfig, ModelConfig, ObjectFieldConfig,
    ScalarFieldConfig, SchemaConfig,
};
use prisma_forge_core::types::{
    DataSource, DataSourceProvider, DataSourceUrl, DefaultFunction, DefaultValue, Field,
    Generator, ScalarType, Schema,
};
use prisma_forge_dsl::{print_raw, Reformatter};

/// Strategy for valid SDL identifiers.
fn identifier() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,12}"
}

/// Single-line documentation text without surrounding whitespace.
fn documentation() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[A-Za-z0-9]{1,8}( [A-Za-z0-9]{1,8}){0,3}")
}

fn quoted() -> impl Strategy<Value = DefaultValue> {
    "[a-z0-9]{0,8}".prop_map(|s| DefaultValue::string(format!("\"{s}\"")))
}

fn number() -> impl Strategy<Value = DefaultValue> {
    prop_oneof![
        any::<i64>().prop_map(DefaultValue::int),
        (-1.0e6f64..1.0e6).prop_map(|f| DefaultValue::float(f).unwrap()),
        prop::sample::select(vec![-0.0, 1e21, -2.5e22, 1.5e-7])
            .prop_map(|f| DefaultValue::float(f).unwrap()),
    ]
}

/// A default the builders accept for `t`, or none.
fn default_for(t: ScalarType) -> BoxedStrategy<Option<DefaultValue>> {
    let value = match t {
        ScalarType::String => prop_oneof![
            quoted(),
            Just(DefaultValue::call(DefaultFunction::Uuid)),
            Just(DefaultValue::call(DefaultFunction::Cuid)),
        ]
        .boxed(),
        ScalarType::Boolean => any::<bool>().prop_map(DefaultValue::boolean).boxed(),
        ScalarType::Int => prop_oneof![
            number(),
            Just(DefaultValue::call(DefaultFunction::AutoIncrement)),
        ]
        .boxed(),
        ScalarType::Float => number().boxed(),
        ScalarType::DateTime => {
            prop_oneof![quoted(), Just(DefaultValue::call(DefaultFunction::Now))].boxed()
        }
        ScalarType::Json => quoted().boxed(),
    };
    prop::option::of(value).boxed()
}

fn scalar_type() -> impl Strategy<Value = ScalarType> {
    prop::sample::select(ScalarType::ALL.to_vec())
}

fn scalar_field() -> impl Strategy<Value = Field> {
    scalar_type()
        .prop_flat_map(|t| {
            (
                identifier(),
                Just(t),
                any::<(bool, bool, bool)>(),
                default_for(t),
                documentation(),
            )
        })
        .prop_map(|(name, t, (required, list, unique), default, doc)| {
            let mut config = ScalarFieldConfig::new(name, t);
            config.is_required = required || list;
            config.is_list = list;
            config.is_unique = unique;
            config.is_updated_at = t == ScalarType::DateTime && !list;
            config.default = default;
            config.documentation = doc;
            builders::scalar_field(config).unwrap()
        })
}

fn object_field() -> impl Strategy<Value = Field> {
    (
        identifier(),
        identifier(),
        any::<(bool, bool)>(),
        prop::option::of(identifier()),
        documentation(),
    )
        .prop_map(|(name, target, (required, with_fields), relation_name, doc)| {
            let mut config = ObjectFieldConfig::new(name, target);
            config.is_required = required;
            if with_fields {
                config = config
                    .with_relation_fields(vec!["ownerId".into()])
                    .with_relation_references(vec!["id".into()]);
            }
            if let Some(relation_name) = relation_name {
                config = config.with_relation_name(relation_name);
            }
            if let Some(doc) = doc {
                config = config.with_documentation(doc);
            }
            builders::object_field(config).unwrap()
        })
}

/// Strategy for a scalar or object field with any valid arity.
fn field() -> impl Strategy<Value = Field> {
    prop_oneof![scalar_field(), object_field()]
}

fn data_source() -> impl Strategy<Value = DataSource> {
    let provider = prop::sample::select(DataSourceProvider::ALL.to_vec());
    let url = prop_oneof![
        "[a-z]{1,8}://[a-z]{1,8}".prop_map(DataSourceUrl::Literal),
        "[A-Z][A-Z_]{0,11}".prop_map(DataSourceUrl::Env),
    ];
    (identifier(), provider, url).prop_map(|(name, provider, url)| {
        builders::data_source(DataSourceConfig::new(name, provider, url)).unwrap()
    })
}

fn generator() -> impl Strategy<Value = Generator> {
    (
        identifier(),
        "[a-z][a-z-]{0,15}",
        prop::option::of("\\./[a-z]{1,8}"),
        prop::collection::vec("[a-z][a-z0-9-]{0,10}", 0..3),
    )
        .prop_map(|(name, provider, output, targets)| {
            let mut config = GeneratorConfig::new(name, provider).with_binary_targets(targets);
            if let Some(output) = output {
                config = config.with_output(output);
            }
            builders::generator(config).unwrap()
        })
}

fn schema() -> impl Strategy<Value = Schema> {
    let model = (identifier(), prop::collection::vec(field(), 0..6), documentation())
        .prop_map(|(name, fields, doc)| {
            let mut config = ModelConfig::new(name, fields);
            if let Some(doc) = doc {
                config = config.with_documentation(doc);
            }
            builders::model(config).unwrap()
        });
    let enumeration = (identifier(), prop::collection::vec(identifier(), 0..5), documentation())
        .prop_map(|(name, values, doc)| {
            let mut config = EnumConfig::new(name, values);
            if let Some(doc) = doc {
                config = config.with_documentation(doc);
            }
            builders::enumeration(config).unwrap()
        });
    (
        prop::option::of(data_source()),
        prop::collection::vec(generator(), 0..3),
        prop::collection::vec(model, 0..4),
        prop::collection::vec(enumeration, 0..3),
    )
        .prop_map(|(data_source, generators, models, enums)| {
            let mut config = SchemaConfig::new(models, enums).with_generators(generators);
            if let Some(data_source) = data_source {
                config = config.with_data_source(data_source);
            }
            builders::schema(config)
        })
}

proptest! {
    /// Printing the same schema twice yields byte-identical text.
    #[test]
    fn print_raw_is_deterministic(s in schema()) {
        prop_assert_eq!(print_raw(&s), print_raw(&s));
    }

    /// The reformatter accepts every printed schema and is idempotent on its output.
    #[test]
    fn reformat_is_idempotent(s in schema()) {
        let formatter = Reformatter::default();
        let once = formatter.reformat(&print_raw(&s)).unwrap();
        let twice = formatter.reformat(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Formatting never drops a statement.
    #[test]
    fn reformat_keeps_every_statement(s in schema()) {
        let out = Reformatter::default().reformat(&print_raw(&s)).unwrap();
        let headers = out
            .lines()
            .filter(|l| {
                ["datasource ", "generator ", "model ", "enum "]
                    .iter()
                    .any(|keyword| l.starts_with(keyword))
            })
            .count();
        prop_assert_eq!(headers, s.statement_count());
    }

    /// Formatted output never carries trailing whitespace.
    #[test]
    fn reformat_trims_lines(s in schema()) {
        let out = Reformatter::default().reformat(&print_raw(&s)).unwrap();
        for line in out.lines() {
            prop_assert_eq!(line, line.trim_end());
        }
    }
}
