/// Identity shared by everyone in the roster.
pub trait Person {
    fn name(&self) -> &str;

    /// Kind-tagged one-line summary, e.g. `Intern: Mehmet, Role: Intern, Salary: 2000.0, Duration: 6 months`.
    fn describe(&self) -> String;
}

/// What the transform operations need from a salaried record.
pub trait StaffMember: Person {
    fn role(&self) -> &str;
    fn salary(&self) -> f64;
    fn set_salary(&mut self, salary: f64);
    fn is_intern(&self) -> bool;
}

/// Knobs of a report run. Implemented by the CLI config and by [`ReportOptions`](crate::core::engine::ReportOptions).
pub trait ReportSettings {
    /// Manager whose team is analyzed. `None` picks the first manager in roster order.
    fn manager_name(&self) -> Option<&str>;
    fn search_name(&self) -> &str;
    /// Raise in percent, `10.0` meaning ten percent.
    fn raise_percent(&self) -> f64;
}
