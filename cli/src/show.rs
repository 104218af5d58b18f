use milkvendor_core::{DayCell, MonthCalendar, MonthlyStatistics};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

// Helper struct for Table Row
#[derive(Tabled)]
struct WeekRow {
    #[tabled(rename = "Sun")]
    sun: String,
    #[tabled(rename = "Mon")]
    mon: String,
    #[tabled(rename = "Tue")]
    tue: String,
    #[tabled(rename = "Wed")]
    wed: String,
    #[tabled(rename = "Thu")]
    thu: String,
    #[tabled(rename = "Fri")]
    fri: String,
    #[tabled(rename = "Sat")]
    sat: String,
}

/// `*` marks a delivery, brackets mark today.
fn cell_label(cell: &Option<DayCell>) -> String {
    match cell {
        None => String::new(),
        Some(c) => {
            let mark = if c.present { "*" } else { " " };
            if c.today {
                format!("[{:>2}{}]", c.day, mark)
            } else {
                format!(" {:>2}{} ", c.day, mark)
            }
        }
    }
}

pub fn render_month(calendar: &MonthCalendar) -> String {
    let rows: Vec<WeekRow> = calendar
        .weeks
        .iter()
        .map(|week| {
            let [sun, mon, tue, wed, thu, fri, sat] = week.each_ref().map(cell_label);
            WeekRow { sun, mon, tue, wed, thu, fri, sat }
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table.to_string()
}

pub fn stats_line(stats: &MonthlyStatistics, currency: &str) -> String {
    format!(
        "Present: {} days | Bill: {}{} | {}% attended",
        stats.present, currency, stats.total_bill, stats.percentage
    )
}

pub fn print_month(calendar: &MonthCalendar, currency: &str) {
    println!("\n\x1b[1;36m{}\x1b[0m", calendar.title);
    println!("{}", render_month(calendar));
    println!("{}", stats_line(&calendar.stats, currency));
}

pub fn print_stats(stats: &MonthlyStatistics, currency: &str) {
    println!("{}", stats_line(stats, currency));
}
