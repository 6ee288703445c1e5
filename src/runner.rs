use crate::assertion;
use crate::config::HarnessConfig;
use crate::engine::ValidationEngine;
use crate::error::HarnessError;
use crate::fixture::{FixtureLoader, Validity};
use crate::report::{SuiteTally, TestResult};
use crate::store::SchemaStore;

/// One root schema together with the flat set of auxiliary schemas it needs
/// for `$ref` resolution.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub deps: &'static [&'static str],
}

/// Every schema in the JAAL specification, with its declared dependencies.
///
/// Dependency sets are declared flat: a root's list contains everything
/// reachable from it, because no transitive expansion happens anywhere.
pub const SCENARIOS: &[Scenario] = &[
    Scenario { name: "definitions", deps: &["event", "style"] },
    Scenario { name: "edge", deps: &[] },
    Scenario { name: "event", deps: &[] },
    Scenario { name: "graph", deps: &["edge", "keyvalue", "matrix", "node"] },
    Scenario { name: "initialState", deps: &["edge", "keyvalue", "graph", "matrix", "node"] },
    Scenario {
        name: "jaal",
        deps: &[
            "definitions",
            "edge",
            "event",
            "graph",
            "initialState",
            "keyvalue",
            "matrix",
            "metadata",
            "node",
            "style",
        ],
    },
    Scenario { name: "keyvalue", deps: &["edge", "graph", "matrix", "node"] },
    Scenario { name: "matrix", deps: &["edge", "graph", "keyvalue", "node"] },
    Scenario { name: "metadata", deps: &[] },
    Scenario { name: "node", deps: &["edge", "graph", "keyvalue", "matrix"] },
    Scenario { name: "style", deps: &[] },
];

/// Drives the suite: per (schema, validity) pair, load the schema, expand
/// its dependencies, compile a validator, discover fixtures, and check each
/// one against the decision table.
pub struct ConformanceRunner<'a> {
    store: SchemaStore,
    loader: FixtureLoader,
    engine: &'a dyn ValidationEngine,
}

impl<'a> ConformanceRunner<'a> {
    pub fn new(config: &HarnessConfig, engine: &'a dyn ValidationEngine) -> Self {
        Self {
            store: SchemaStore::new(config.schema_dir()),
            loader: FixtureLoader::new(config.test_dir()),
            engine,
        }
    }

    /// Run one schema/validity pair, feeding each fixture's result into the
    /// tally.
    ///
    /// Discovery and compilation errors abort the pair before any fixture is
    /// counted; per-fixture failures are recorded and the pair continues.
    pub fn run_pair(
        &self,
        scenario: &Scenario,
        validity: Validity,
        tally: &mut SuiteTally,
    ) -> Result<(), HarnessError> {
        let schema = self.store.load(scenario.name)?;
        let deps = self.store.expand(scenario.deps)?;
        let validator = self.engine.compile(&schema, &deps)?;
        let fixtures = self.loader.discover(scenario.name, validity)?;

        for (file_name, fixture) in &fixtures {
            let outcome = validator.validate(fixture);
            let result = assertion::check(fixture, validity, &outcome);
            match &result {
                TestResult::Pass => println!("{file_name}: ok"),
                TestResult::Fail(reason) => println!("{file_name}: FAILED: {reason}"),
            }
            tally.record(&result);
        }

        Ok(())
    }

    /// Run the whole suite: every scenario's valid pairs, then every
    /// scenario's invalid pairs, in table order.
    ///
    /// A pair aborted by a discovery or compilation error is logged and
    /// counted as aborted; the suite never halts on one schema's failure.
    pub fn run_suite(&self) -> SuiteTally {
        let mut tally = SuiteTally::new();
        for validity in [Validity::Valid, Validity::Invalid] {
            println!("--- {validity} fixtures ---");
            for scenario in SCENARIOS {
                if let Err(err) = self.run_pair(scenario, validity, &mut tally) {
                    eprintln!("{}/{validity}: pair aborted: {err}", scenario.name);
                    tally.record_aborted_pair();
                }
            }
        }
        tally
    }
}
