use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};

/// Render rows as a rounded table with a header row.
///
/// Columns listed in `right_aligned` (e.g. prices) are right aligned.
pub(crate) fn table<const N: usize>(
    header: [&str; N],
    rows: impl IntoIterator<Item = [String; N]>,
    right_aligned: &[usize],
) -> String {
    let mut builder = Builder::default();

    builder.push_record(header.map(str::to_string));

    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());

    for &column in right_aligned {
        table.modify(Columns::new(column..=column), Alignment::right());
    }

    table.modify(Rows::first(), Alignment::center());

    table.to_string()
}
