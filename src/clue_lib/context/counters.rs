/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every solve, with or without assumptions.
    pub total_solves: usize,

    /// A count of every conflict seen during a solve.
    pub total_conflicts: usize,

    /// A count of all decisions made.
    pub total_decisions: usize,

    /// A count of all literals valued by propagation.
    pub total_propagations: usize,
}

impl std::fmt::Display for Counters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "c SOLVES       {}", self.total_solves)?;
        writeln!(f, "c DECISIONS    {}", self.total_decisions)?;
        writeln!(f, "c CONFLICTS    {}", self.total_conflicts)?;
        write!(f, "c PROPAGATIONS {}", self.total_propagations)
    }
}
