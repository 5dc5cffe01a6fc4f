/// Per-department counts shown on the dashboards.
#[derive(Debug, Clone)]
pub struct DeptSummary {
    pub name: String,
    pub total: usize,
    pub students: usize,
    pub employees: usize,
}
