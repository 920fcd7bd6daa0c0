use crate::dependants::domain::{DependantRecord, PackageId, ReportMetadata};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Gallery page prefix used for dependant links
const GALLERY_URL: &str = "https://www.nuget.org/packages";

/// MarkdownFormatter adapter for the dependants report
///
/// Renders a heading followed by one list item per dependant:
///
/// ```text
/// # NuGet packages depending on Foo:
///  - [Bar](https://www.nuget.org/packages/Bar/) v1.0.0 => `1.2.0`
///  - [Baz](https://www.nuget.org/packages/Baz/) v2.0.0 => **Foo.Core** `3.0.0`
/// ```
///
/// The bold package marker only appears when the matched dependency is not
/// literally the target id.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Generate a Markdown hyperlink to the package's gallery page
    fn package_link(id: &str) -> String {
        format!("[{}]({}/{}/)", id, GALLERY_URL, id)
    }

    fn render_line(target: &PackageId, record: &DependantRecord) -> String {
        let marker = if record.our_package() != target.as_str() {
            format!("**{}** ", record.our_package())
        } else {
            String::new()
        };

        format!(
            " - {} v{} => {}`{}`\n",
            Self::package_link(record.id()),
            record.their_version(),
            marker,
            record.our_version()
        )
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(
        &self,
        target: &PackageId,
        records: &[DependantRecord],
        _metadata: &ReportMetadata,
    ) -> Result<String> {
        let mut output = format!("# NuGet packages depending on {}:\n", target);
        for record in records {
            output.push_str(&Self::render_line(target, record));
        }
        Ok(output)
    }
}
