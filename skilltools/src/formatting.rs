use chrono::{DateTime, Utc};
use prettytable::{
    format::{LinePosition, LineSeparator, TableFormat},
    row,
    Table,
};
use sales_engine::{money::format_money, Intent, Order, StoreInfo};

fn markdown_format() -> TableFormat {
    prettytable::format::FormatBuilder::new()
        .column_separator('|')
        .borders('|')
        .separator(LinePosition::Title, LineSeparator::new('-', '|', '|', '|'))
        .padding(1, 1)
        .build()
}

fn markdown_style(table: &mut Table) {
    table.set_format(markdown_format());
}

pub fn format_store_info(store: &StoreInfo, now: DateTime<Utc>) -> String {
    let zone = store.local_zone();
    let mut table = Table::new();
    table.set_titles(row!["Setting", "Value"]);
    table.add_row(row!["Money format", store.money_format]);
    table.add_row(row!["Timezone", store.timezone]);
    table.add_row(row!["IANA timezone", store.iana_timezone.as_deref().unwrap_or("Not set")]);
    table.add_row(row!["Zone in use", zone.to_string()]);
    table.add_row(row!["Current offset", zone.offset_string(now)]);
    table.add_row(row!["Local time", zone.local_datetime(now).format("%Y-%m-%d %H:%M").to_string()]);
    markdown_style(&mut table);
    format!("{table}")
}

pub fn format_orders(orders: &[Order], store: &StoreInfo) -> String {
    if orders.is_empty() {
        return "No orders".to_string();
    }
    let mut table = Table::new();
    table.set_titles(row!["id", "Created At", "Total price", "Status", "Financial status"]);
    orders.iter().for_each(|order| {
        table.add_row(row![
            order.id,
            order.created_at,
            format!("{:>11}", format_money(order.total_price, &store.money_format).display),
            order.status.as_deref().unwrap_or_default(),
            order.financial_status.as_deref().unwrap_or_default()
        ]);
    });
    markdown_style(&mut table);
    format!("{table}\nTotal: {}", orders.len())
}

pub fn format_report(answers: &[(Intent, String)]) -> String {
    let mut table = Table::new();
    table.set_titles(row!["Intent", "Answer"]);
    answers.iter().for_each(|(intent, answer)| {
        table.add_row(row![intent.name(), answer]);
    });
    markdown_style(&mut table);
    format!("{table}")
}
