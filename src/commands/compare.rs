use crate::domain::areas::session::Session;
use crate::domain::objects::comparison::Comparison;
use crate::domain::objects::diff::diff_lines;
use crate::domain::objects::mistake::{MistakeMapper, MistakeRecord};
use crate::domain::objects::report::ComparisonReport;
use anyhow::Context;
use std::io::Write;

impl Session {
    /// Compares every pair and writes the report once all of them succeeded.
    pub async fn compare(&self, comparisons: &[Comparison]) -> anyhow::Result<()> {
        let report = self.build_report(comparisons).await?;
        let json = report.to_pretty_json()?;

        let mut writer = self.writer();
        writeln!(writer, "{json}")?;
        writer.flush()?;

        Ok(())
    }

    pub async fn build_report(
        &self,
        comparisons: &[Comparison],
    ) -> anyhow::Result<ComparisonReport> {
        let mut report = ComparisonReport::default();

        for comparison in comparisons {
            let label = comparison.label();
            log::info!("Comparing {label} ({})", comparison.mistake_type);

            let mistakes = self
                .compare_files(comparison)
                .await
                .with_context(|| format!("Comparison {label:?} failed"))?;

            log::info!("{label}: {} mistakes", mistakes.len());
            report.insert(label, mistakes);
        }

        if report.is_empty() {
            log::warn!("No document pairs to compare");
        }
        log::info!(
            "Compared {} pairs, {} mistakes in total",
            report.len(),
            report.total_mistakes()
        );

        Ok(report)
    }

    pub async fn compare_files(
        &self,
        comparison: &Comparison,
    ) -> anyhow::Result<Vec<MistakeRecord>> {
        let text1 = self.workspace().read_document(&comparison.file1).await?;
        let text2 = self.workspace().read_document(&comparison.file2).await?;

        let lines1 = text1.split('\n').collect::<Vec<_>>();
        let segments = diff_lines(&text1, &text2);
        log::debug!(
            "{} vs {}: {} segments",
            comparison.file1,
            comparison.file2,
            segments.len()
        );

        let mapper = MistakeMapper::new(
            &comparison.file1,
            &comparison.file2,
            &comparison.mistake_type,
            self.policy(),
        );

        Ok(mapper.map(&segments, &lines1)?)
    }
}
