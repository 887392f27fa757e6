//! Record-shape templates per destination
//!
//! A destination differs from the others only in which table is joined and
//! which fields need their export expression rewritten (lookups, decodes,
//! multi-value aggregation). That makes the catalog a flat table of
//! templates resolved by label lookup rather than an inheritance tree.

use crate::variant::ExportVariant;
use fc_core::sql_utils::{escape_sql_string, quote_ident};

/// How export expressions are built for a destination's fields
#[derive(Debug, Clone, Copy)]
pub enum ExportStyle {
    /// Select the field as a column off the base alias
    Column,
    /// Multi-valued field aggregated through a variant-keyed value table
    MultiValue,
    /// Per-field rewrites, falling back to the column default
    Overrides(fn(base: &str, field: &str) -> Option<String>),
}

/// Static definition of how to join to and extract a field for one
/// destination table
#[derive(Debug)]
pub struct RecordShape {
    /// Canonical destination label
    pub name: &'static str,
    /// Alias of the destination table in the generated query
    pub base: &'static str,
    /// Join chain connecting the base alias back to application/person
    pub join: &'static str,
    /// Export-expression rules
    pub export: ExportStyle,
}

impl RecordShape {
    /// SQL expression exporting `field` for this destination
    pub fn export_expression(&self, field: &str, variant: ExportVariant) -> String {
        match self.export {
            ExportStyle::Column => default_column(self.base, field),
            ExportStyle::MultiValue => multi_value_export(self.base, field, variant),
            ExportStyle::Overrides(rewrite) => {
                rewrite(self.base, field).unwrap_or_else(|| default_column(self.base, field))
            }
        }
    }
}

/// Default export: `<base>."<field>"`
fn default_column(base: &str, field: &str) -> String {
    format!("{}.{}", base, quote_ident(field))
}

/// Aggregate a multi-valued field through the variant's value table
fn multi_value_export(base: &str, field: &str, variant: ExportVariant) -> String {
    format!(
        "(select string_agg(v.value, ', ' order by v.value) from {table} v where v.record = {base}.id and v.field = '{field}')",
        table = variant.value_table(),
        base = base,
        field = escape_sql_string(field),
    )
}

fn application_overrides(_base: &str, field: &str) -> Option<String> {
    match field {
        "round" => Some("(select name from lookup_round where id = a.round)".to_string()),
        "period" => Some(
            "(select name from lookup_period where id = (select period from lookup_round where id = a.round))"
                .to_string(),
        ),
        _ => None,
    }
}

fn relation_overrides(base: &str, field: &str) -> Option<String> {
    // Prompt-backed fields store a lookup id, not the display value
    match field {
        "education_level" | "type" => Some(format!(
            "(select value from lookup_prompt where id = {})",
            default_column(base, field)
        )),
        _ => None,
    }
}

fn school_overrides(base: &str, field: &str) -> Option<String> {
    let export = default_column(base, field);
    match field {
        "degree" => Some(format!(
            "(select value from lookup_prompt where id = {})",
            export
        )),
        "type" => Some(format!(
            "case {} when 'H' then 'High School' when 'U' then 'Undergraduate' when 'G' then 'Graduate' else null end",
            export
        )),
        _ => None,
    }
}

static ACTIVITY: RecordShape = RecordShape {
    name: "activity",
    base: "act",
    join: "join activity act on a.id = act.record",
    export: ExportStyle::Column,
};

static ADDRESS: RecordShape = RecordShape {
    name: "address",
    base: "ad",
    join: "join address ad on ad.record = p.id",
    export: ExportStyle::Column,
};

static APPLICATION: RecordShape = RecordShape {
    name: "application",
    base: "a",
    join: "",
    export: ExportStyle::Overrides(application_overrides),
};

static APPLICATION_FIELD: RecordShape = RecordShape {
    name: "application field",
    base: "a",
    join: "",
    export: ExportStyle::MultiValue,
};

static CBO: RecordShape = RecordShape {
    name: "cbos",
    base: "cbo",
    join: "join entity cbo on cbo.record = a.id and cbo.entity = '684a173f-17fc-4f3d-bfe3-df2f1aedc79c'",
    export: ExportStyle::MultiValue,
};

static DEVICE: RecordShape = RecordShape {
    name: "device",
    base: "d",
    join: "join device d on d.record = p.id",
    export: ExportStyle::Column,
};

static HONORS_AND_AWARDS: RecordShape = RecordShape {
    name: "honors & awards",
    base: "awd",
    join: "join entity awd on awd.record = a.id and awd.entity = 'fba8d67b-f694-4e0d-b189-e3b8dfa2f869'",
    export: ExportStyle::MultiValue,
};

static INTEREST: RecordShape = RecordShape {
    name: "interests",
    base: "i",
    join: "join interest i on i.record = p.id",
    export: ExportStyle::Column,
};

static INTEREST_FIELD: RecordShape = RecordShape {
    name: "interests field",
    base: "i",
    join: "join interest i on i.record = p.id",
    export: ExportStyle::MultiValue,
};

static PERSON: RecordShape = RecordShape {
    name: "person",
    base: "p",
    join: "",
    export: ExportStyle::Column,
};

static PERSON_FIELD: RecordShape = RecordShape {
    name: "person field",
    base: "p",
    join: "",
    export: ExportStyle::MultiValue,
};

static RELATION: RecordShape = RecordShape {
    name: "relationship",
    base: "r",
    join: "join relation r on r.record = p.id",
    export: ExportStyle::Overrides(relation_overrides),
};

static RELATION_ADDRESS: RecordShape = RecordShape {
    name: "relationship address",
    base: "ra",
    join: "join relation r on r.record = p.id\njoin address ra on ra.record = r.id",
    export: ExportStyle::Column,
};

static RELATION_FIELD: RecordShape = RecordShape {
    name: "relationship field",
    base: "r",
    join: "join relation r on r.record = p.id",
    export: ExportStyle::MultiValue,
};

static RELATION_JOB: RecordShape = RecordShape {
    name: "relationship job",
    base: "rj",
    join: "join relation r on r.record = p.id\njoin job rj on rj.record = r.id",
    export: ExportStyle::Column,
};

static RELATION_SCHOOL: RecordShape = RecordShape {
    name: "relationship school",
    base: "rs",
    join: "join relation r on r.record = p.id\njoin school rs on rs.record = r.id",
    export: ExportStyle::Overrides(school_overrides),
};

static RELATIVE_EMPLOYEE: RecordShape = RecordShape {
    name: "relative employee",
    base: "re",
    join: "join entity re on a.id = re.record and re.entity = '84401b9b-bd17-4522-a1b5-c70ca539f659'",
    export: ExportStyle::MultiValue,
};

static SCHOOL: RecordShape = RecordShape {
    name: "school",
    base: "s",
    join: "join school s on s.record = p.id",
    export: ExportStyle::Overrides(school_overrides),
};

// Score rows come in one-per-component; collapse them to one row per
// sitting before joining so any score column can be exported.
static TEST_SCORE: RecordShape = RecordShape {
    name: "test scores",
    base: "t",
    join: "join (
  select
    x.record,
    x.type,
    x.date,
    x.confirmed,
    max(x.total) as total,
    max(x.score1) as score1,
    max(x.score2) as score2,
    max(x.score3) as score3,
    max(x.score4) as score4,
    max(x.score5) as score5,
    max(x.score6) as score6,
    max(x.score7) as score7,
    max(x.score8) as score8,
    max(x.score9) as score9,
    max(x.score10) as score10,
    max(x.score11) as score11,
    max(x.score12) as score12,
    max(x.score13) as score13,
    max(x.score14) as score14,
    max(x.score15) as score15,
    max(x.score16) as score16,
    max(x.score17) as score17
  from test x
  group by x.record, x.type, x.date, x.confirmed
) t on t.record = p.id",
    export: ExportStyle::Column,
};

/// Look up the record-shape template for a destination label,
/// case-insensitively
pub fn shape_for(destination: &str) -> Option<&'static RecordShape> {
    let shape = match destination.trim().to_lowercase().as_str() {
        "activity" => &ACTIVITY,
        "address" => &ADDRESS,
        "application" => &APPLICATION,
        "application field" => &APPLICATION_FIELD,
        "cbos" => &CBO,
        "device" => &DEVICE,
        "honors & awards" => &HONORS_AND_AWARDS,
        "interests" => &INTEREST,
        "interests field" => &INTEREST_FIELD,
        "person" => &PERSON,
        "person field" => &PERSON_FIELD,
        "relationship" => &RELATION,
        "relationship address" => &RELATION_ADDRESS,
        "relationship field" => &RELATION_FIELD,
        "relationship job" => &RELATION_JOB,
        "relationship school" => &RELATION_SCHOOL,
        "relative employee" => &RELATIVE_EMPLOYEE,
        "school" => &SCHOOL,
        "test scores" => &TEST_SCORE,
        _ => return None,
    };
    Some(shape)
}

#[cfg(test)]
#[path = "shapes_test.rs"]
mod tests;
