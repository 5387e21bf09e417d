// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! This sample demonstrates date fields with different wire formats in one record.
//!
//! This includes:
//!
//! - Decoding a record with `serde` and reading the timestamps
//! - Updating a field and watching its raw value change
//! - Decoding and encoding the same record through a JSON object without `serde` derive

use datewire::{DateField, Iso8601Fractional, OptionalDateField, ReferenceTimestamp, Rfc2822, YearMonthDay};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize)]
struct Order {
    placed: DateField<Iso8601Fractional>,
    due: DateField<YearMonthDay>,
    synced: DateField<ReferenceTimestamp>,
    shipped: OptionalDateField<Rfc2822>,
}

const ORDER: &str = r#"{
    "placed": "1996-12-19T16:39:57.538-08:00",
    "due": "1996-12-31",
    "synced": 604548113
}"#;

fn main() -> anyhow::Result<()> {
    with_serde()?;
    with_container()?;

    Ok(())
}

fn with_serde() -> anyhow::Result<()> {
    let mut order: Order = serde_json::from_str(ORDER)?;

    println!("placed at {} (raw {})", order.placed.value(), order.placed.raw());
    println!("due on {} (raw {})", order.due.value(), order.due.raw());
    println!("synced at {} (raw {})", order.synced.value(), order.synced.raw());
    println!("shipped: {}", order.shipped.is_some());

    // Setting a timestamp re-derives the raw value in the field's own format.
    order.shipped.set(Some(Timestamp::from_second(851_990_400)?));
    println!("shipped raw: {:?}", order.shipped.raw());

    println!("{}", serde_json::to_string_pretty(&order)?);

    Ok(())
}

fn with_container() -> anyhow::Result<()> {
    let Value::Object(map) = serde_json::from_str::<Value>(ORDER)? else {
        anyhow::bail!("expected a JSON object");
    };

    let placed = DateField::<Iso8601Fractional>::decode_from(&map, "placed")?;
    let shipped = OptionalDateField::<Rfc2822>::decode_from(&map, "shipped")?;

    let mut out = Map::new();
    placed.encode_into(&mut out, "placed");
    shipped.encode_into(&mut out, "shipped");

    println!("{}", Value::Object(out));

    Ok(())
}
