use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use futures::executor::block_on;
use indexmap::IndexMap;
use libgraphql_coercion::Context;
use libgraphql_coercion::ResolutionInfo;
use libgraphql_coercion::Value;
use libgraphql_coercion::coercer::Direction;
use libgraphql_coercion::config::CoercionConfig;
use libgraphql_coercion::engine::CoercionEngine;
use libgraphql_coercion::schema::Schema;
use libgraphql_coercion::types::DefinitionRef;
use libgraphql_coercion::types::EnumType;
use libgraphql_coercion::types::Field;
use libgraphql_coercion::types::InputField;
use libgraphql_coercion::types::InputObjectType;
use libgraphql_coercion::types::ObjectType;
use libgraphql_coercion::types::Parameter;
use libgraphql_coercion::types::TypeAnnotation;

const LIST_SIZES: [usize; 3] = [10, 100, 1_000];

fn type_ref(source: &str) -> TypeAnnotation {
    TypeAnnotation::parse(source).unwrap()
}

fn bench_engine() -> CoercionEngine {
    let schema = Schema::builder()
        .add_type(EnumType::new("Status").with_values(["ACTIVE", "SUSPENDED"]))
        .unwrap()
        .add_type(
            InputObjectType::new("ItemInput")
                .with_field(InputField::new("id", type_ref("ID!")))
                .with_field(InputField::new("quantity", type_ref("Int")).with_default_value(1))
                .with_field(InputField::new("status", type_ref("Status")))
        )
        .unwrap()
        .add_type(
            ObjectType::new("Item")
                .with_field(Field::new("id", type_ref("ID!")))
        )
        .unwrap()
        .add_type(
            ObjectType::new("Query").with_field(
                Field::new("items", type_ref("[Item!]!"))
                    .with_parameter(Parameter::new("input", type_ref("[ItemInput!]")))
                    .with_parameter(Parameter::new("first", type_ref("Int")).with_default_value(10))
                    .with_parameter(Parameter::new("after", type_ref("String")))
            )
        )
        .unwrap()
        .build()
        .unwrap();
    CoercionEngine::new(schema, &CoercionConfig::default())
}

fn item_input(idx: usize) -> Value {
    let mut entries = IndexMap::new();
    entries.insert("id".to_string(), Value::Int(idx as i64));
    entries.insert("status".to_string(), Value::Enum("ACTIVE".to_string()));
    Value::Object(entries)
}

// ─── Group 1: Scalar Lists ───────────────────────────────

fn scalar_lists(c: &mut Criterion) {
    let engine = bench_engine();
    let info = ResolutionInfo::new("Query", "items");
    let context = Context::empty();
    let mut group = c.benchmark_group("scalar_lists");

    for (direction, annot) in [
        (Direction::Input, type_ref("[Int!]!")),
        (Direction::Output, type_ref("[String]")),
    ] {
        let coercer = engine.coercer_for(&annot, direction);
        for size in LIST_SIZES {
            let values = Value::List((0..size).map(|idx| Value::Int(idx as i64)).collect());
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(
                BenchmarkId::new(direction.to_string(), size),
                &values,
                |b, values| {
                    b.iter(|| {
                        black_box(block_on(coercer.coerce(
                            values.clone(),
                            DefinitionRef::Variable("values"),
                            &context,
                            &info,
                        )))
                    })
                },
            );
        }
    }

    group.finish();
}

// ─── Group 2: Input Objects ──────────────────────────────

fn input_objects(c: &mut Criterion) {
    let engine = bench_engine();
    let info = ResolutionInfo::new("Query", "items");
    let context = Context::empty();
    let coercer = engine.coercer_for(&type_ref("[ItemInput!]"), Direction::Input);
    let mut group = c.benchmark_group("input_objects");

    for size in LIST_SIZES {
        let values = Value::List((0..size).map(item_input).collect());
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| {
                black_box(block_on(coercer.coerce(
                    values.clone(),
                    DefinitionRef::Variable("input"),
                    &context,
                    &info,
                )))
            })
        });
    }

    group.finish();
}

// ─── Group 3: Field Arguments ────────────────────────────

fn field_arguments(c: &mut Criterion) {
    let engine = bench_engine();
    let info = ResolutionInfo::new("Query", "items");
    let context = Context::empty();
    let field = engine.field("Query", "items").cloned().unwrap();
    let mut occurrences = IndexMap::new();
    occurrences.insert(
        "input".to_string(),
        Value::List((0..10).map(item_input).collect()),
    );
    occurrences.insert("after".to_string(), Value::from("cursor"));

    c.bench_function("field_arguments", |b| {
        b.iter(|| {
            black_box(block_on(engine.coerce_field_arguments(
                &field,
                &occurrences,
                &context,
                &info,
            )))
        })
    });
}

// ─── Group 4: Coercer Construction ───────────────────────

fn coercer_construction(c: &mut Criterion) {
    let engine = bench_engine();
    let annot = type_ref("[[ItemInput!]]!");

    c.bench_function("coercer_for (cached)", |b| {
        b.iter(|| black_box(engine.coercer_for(&annot, Direction::Input)))
    });
}

criterion_group!(
    benches,
    scalar_lists,
    input_objects,
    field_arguments,
    coercer_construction,
);
criterion_main!(benches);
