//! Expected shapes of the two bundled JSON documents.
//!
//! These definitions are the informal schema version: the repository decode
//! types in `ep-core` must stay in sync with them.

use ep_schema::{Field, Shape};

/// Shape of `assets/scenarios.json`.
pub fn scenario_array() -> Shape {
    Shape::object(vec![Field::required(
        "all",
        Shape::array(Shape::object(vec![
            Field::required("name", Shape::String),
            Field::required("data", scenario_datum()),
        ])),
    )])
}

fn scenario_datum() -> Shape {
    Shape::object(vec![
        Field::required(
            "population",
            Shape::object(vec![
                Field::required("population", Shape::non_negative_integer()),
                Field::required("initialNumberOfCases", Shape::non_negative_integer()),
                Field::required("importsPerDay", Shape::number_at_least(0.0)),
                Field::required("hospitalBeds", Shape::non_negative_integer()),
                Field::required("icuBeds", Shape::non_negative_integer()),
                Field::required("caseCountsName", Shape::String),
                Field::required("ageDistributionName", Shape::String),
            ]),
        ),
        Field::required(
            "epidemiological",
            Shape::object(vec![
                Field::required(
                    "r0",
                    Shape::object(vec![
                        Field::required("begin", Shape::number_at_least(0.0)),
                        Field::required("end", Shape::number_at_least(0.0)),
                    ]),
                ),
                Field::required("latencyDays", Shape::number_at_least(0.0)),
                Field::required("infectiousPeriodDays", Shape::number_at_least(0.0)),
                Field::required("seasonalForcing", Shape::number()),
                Field::required("peakMonth", Shape::integer_in(0, 11)),
                Field::required("hospitalStayDays", Shape::number_at_least(0.0)),
                Field::required("icuStayDays", Shape::number_at_least(0.0)),
                Field::required("overflowSeverity", Shape::number_at_least(0.0)),
            ]),
        ),
        Field::required(
            "simulation",
            Shape::object(vec![
                Field::required("simulationTimeRange", date_range()),
                Field::required("numberStochasticRuns", Shape::non_negative_integer()),
            ]),
        ),
        Field::required(
            "mitigation",
            Shape::object(vec![Field::required(
                "mitigationIntervals",
                Shape::array(Shape::object(vec![
                    Field::required("name", Shape::String),
                    Field::required("timeRange", date_range()),
                    Field::required("transmissionReduction", Shape::percentage()),
                ])),
            )]),
        ),
    ])
}

/// Shape of `assets/case_counts.json`.
pub fn case_counts_array() -> Shape {
    Shape::object(vec![Field::required(
        "all",
        Shape::array(Shape::object(vec![
            Field::required("name", Shape::String),
            Field::required("data", Shape::array(case_counts_datum())),
        ])),
    )])
}

fn case_counts_datum() -> Shape {
    Shape::object(vec![
        Field::required("time", Shape::Date),
        Field::optional("cases", Shape::non_negative_integer()),
        Field::optional("deaths", Shape::non_negative_integer()),
        Field::optional("icu", Shape::non_negative_integer()),
        Field::optional("hospitalized", Shape::non_negative_integer()),
    ])
}

fn date_range() -> Shape {
    Shape::object(vec![
        Field::required("begin", Shape::Date),
        Field::required("end", Shape::Date),
    ])
}
