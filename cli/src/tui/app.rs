use chrono::{Datelike, NaiveDate};
use milkvendor_core::{AttendanceRepository, AttendanceService, DateKey, MonthCalendar, ViewedMonth};
use tracing::warn;

pub struct App<R: AttendanceRepository> {
    pub service: AttendanceService<R>,
    pub currency: String,
    pub today: NaiveDate,
    pub selected_day: u32,
    pub status: Option<String>,
}

impl<R: AttendanceRepository> App<R> {
    pub fn new(service: AttendanceService<R>, currency: String, today: NaiveDate) -> App<R> {
        let mut app = App {
            service,
            currency,
            today,
            selected_day: 1,
            status: None,
        };
        if app.month().contains(today) {
            app.selected_day = today.day();
        }
        app
    }

    pub fn month(&self) -> ViewedMonth {
        self.service.store().viewed_month()
    }

    pub fn calendar(&self) -> MonthCalendar {
        self.service.calendar(&DateKey::from_date(self.today))
    }

    pub fn selected_key(&self) -> DateKey {
        self.month().key(self.selected_day)
    }

    /// Moves the cursor by `delta` days, crossing into neighbouring months.
    pub fn move_selection(&mut self, delta: i32) {
        let target = self.selected_day as i32 + delta;
        let before = self.month();
        if target < 1 {
            self.service.change_month(-1);
            self.selected_day = if self.month() == before {
                1
            } else {
                (self.month().days() as i32 + target).max(1) as u32
            };
        } else if target > before.days() as i32 {
            let overflow = target - before.days() as i32;
            self.service.change_month(1);
            self.selected_day = if self.month() == before {
                before.days()
            } else {
                (overflow as u32).min(self.month().days())
            };
        } else {
            self.selected_day = target as u32;
        }
        self.status = None;
    }

    pub fn next_month(&mut self) {
        self.service.change_month(1);
        self.clamp_selection();
    }

    pub fn previous_month(&mut self) {
        self.service.change_month(-1);
        self.clamp_selection();
    }

    pub fn go_to_today(&mut self) {
        self.service.view_month(ViewedMonth::containing(self.today));
        self.selected_day = self.today.day();
        self.status = None;
    }

    pub fn toggle_selected(&mut self) {
        let key = self.selected_key();
        match self.service.toggle(&key) {
            Ok(true) => self.status = Some(format!("{} marked present", key)),
            Ok(false) => self.status = Some(format!("{} marked absent", key)),
            Err(e) => {
                warn!("Failed to save attendance: {:#}", e);
                self.status = Some(format!("Could not save: {}", e));
            }
        }
    }

    fn clamp_selection(&mut self) {
        self.selected_day = self.selected_day.min(self.month().days());
        self.status = None;
    }
}
