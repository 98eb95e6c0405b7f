//! Translation statistics collection and reporting.
//!
//! This module tracks per-table access counters for the translation core. It
//! provides:
//! 1. **Access counts:** Read and write accesses through the mapped region.
//! 2. **Hit/miss breakdown:** Per-direction hits and misses, plus matched
//!    accesses rejected for an invalid half-page.
//! 3. **Derived totals:** Combined hits, misses, and accesses, and a printed
//!    report for end-of-run summaries.
//!
//! Unmapped-window accesses bypass the cache and are not counted here.

/// Access counters for one translation cache.
///
/// Counters are plain fields incremented by the translate paths; the
/// management surface (indexed reads/writes, probes, flushes) is not
/// counted.
#[derive(Clone, Copy, Debug, Default)]
pub struct TlbStats {
    /// Read (fetch or load) accesses that hit a valid half-page.
    pub read_hits: u64,
    /// Read accesses with no matching entry.
    pub read_misses: u64,
    /// Total read accesses through the mapped region.
    pub read_accesses: u64,
    /// Write accesses that hit a valid, dirty half-page.
    pub write_hits: u64,
    /// Write accesses with no matching entry.
    pub write_misses: u64,
    /// Total write accesses through the mapped region.
    pub write_accesses: u64,
    /// Accesses that matched an entry whose selected half-page was invalid.
    pub invalids: u64,
}

impl TlbStats {
    /// Total hits across both directions.
    pub fn hits(&self) -> u64 {
        self.read_hits + self.write_hits
    }

    /// Total misses across both directions.
    pub fn misses(&self) -> u64 {
        self.read_misses + self.write_misses
    }

    /// Total mapped-region accesses across both directions.
    pub fn accesses(&self) -> u64 {
        self.read_accesses + self.write_accesses
    }

    /// Prints a summary report to stdout.
    ///
    /// # Arguments
    ///
    /// * `name` - Table name used to label the report (e.g. `"dtb"`).
    pub fn report(&self, name: &str) {
        println!("----------------------------------------------------------");
        println!("{name} TRANSLATION STATISTICS");
        println!("{name}.read_accesses   {}", self.read_accesses);
        println!("{name}.read_hits       {}", self.read_hits);
        println!("{name}.read_misses     {}", self.read_misses);
        println!("{name}.write_accesses  {}", self.write_accesses);
        println!("{name}.write_hits      {}", self.write_hits);
        println!("{name}.write_misses    {}", self.write_misses);
        println!("{name}.invalids        {}", self.invalids);
        println!("{name}.accesses        {}", self.accesses());
        println!("{name}.hits            {}", self.hits());
        println!("{name}.misses          {}", self.misses());
        println!("----------------------------------------------------------");
    }
}
