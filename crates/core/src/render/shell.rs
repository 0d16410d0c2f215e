//! Page shell: a full HTML document around a rendered view fragment.

use super::html::escape_html;

/// Styles for the class names emitted by the HTML renderer.
const SHELL_STYLE: &str = "\
body{margin:0;font-family:system-ui,-apple-system,Segoe UI,Arial,sans-serif;background:#f8fafc;color:#0f172a}\
main{max-width:1100px;margin:0 auto}\
.p-6{padding:24px}.pt-6{padding-top:24px}.p-3{padding:12px}.mb-2{margin-bottom:8px}\
.space-y-6>*+*{margin-top:24px}.space-y-4>*+*{margin-top:16px}.space-y-3>*+*{margin-top:12px}\
.grid{display:grid}.gap-6{gap:24px}.gap-4{gap:16px}.gap-1{gap:4px}.grid-cols-3{grid-template-columns:repeat(3,minmax(0,1fr))}\
.flex{display:flex}.flex-wrap{flex-wrap:wrap}.items-center{align-items:center}.justify-center{justify-content:center}.justify-between{justify-content:space-between}\
.space-x-2>*+*{margin-left:8px}.h-64{height:16rem}.w-full{width:100%}.text-center{text-align:center}\
.card{background:#fff;border:1px solid #e2e8f0;border-radius:10px;box-shadow:0 1px 2px rgba(0,0,0,.05)}\
.card-header{padding:20px 24px 0}.card-content{padding:16px 24px 24px}\
.card-title{display:flex;align-items:center;gap:8px;margin:0;font-size:18px}.card-description{margin:4px 0 0;color:#64748b;font-size:14px}\
.badge{display:inline-block;border-radius:999px;padding:2px 10px;font-size:12px;font-weight:600}\
.badge-secondary{background:#f1f5f9;color:#0f172a}\
.bg-green-100{background:#dcfce7}.text-green-800{color:#166534}\
.bg-yellow-100{background:#fef9c3}.text-yellow-800{color:#854d0e}\
.bg-red-100{background:#fee2e2}.text-red-800{color:#991b1b}\
.bg-gray-100{background:#f3f4f6}.text-gray-800{color:#1f2937}.bg-gray-50{background:#f9fafb}\
.border-red-200{border-color:#fecaca}.text-red-600{color:#dc2626}\
.text-gray-500{color:#6b7280}.text-gray-600{color:#4b5563}.text-muted-foreground{color:#64748b}\
.text-3xl{font-size:30px}.text-sm{font-size:14px}.text-xs{font-size:12px}\
.font-bold{font-weight:700}.font-semibold{font-weight:600}.font-medium{font-weight:500}.tracking-tight{letter-spacing:-.02em}\
.rounded-lg{border-radius:8px}.separator{border:0;border-top:1px solid #e2e8f0}\
.spinner{width:32px;height:32px;border-radius:50%;border-bottom:2px solid #2563eb;animation:spin 1s linear infinite}\
@keyframes spin{to{transform:rotate(360deg)}}";

/// Wraps a rendered view in a complete HTML document.
///
/// The shell owns the document chrome only; the view content is passed in as its child.
#[derive(Clone, Debug)]
pub struct PageShell {
    title: String,
}

impl PageShell {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Produce the full document with `content` as the body.
    pub fn wrap(&self, content: &str) -> String {
        format!(
            "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
             <title>{}</title><style>{SHELL_STYLE}</style></head>\
             <body><main>{content}</main></body></html>",
            escape_html(&self.title)
        )
    }
}

impl Default for PageShell {
    fn default() -> Self {
        Self::new("SwasthyaSetu Health Monitoring")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_content_in_document() {
        let shell = PageShell::new("Reports & Alerts");
        let page = shell.wrap("<div id=\"child\"></div>");

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Reports &amp; Alerts</title>"));
        assert!(page.contains("<main><div id=\"child\"></div></main>"));
        assert!(page.ends_with("</html>"));
    }

    #[test]
    fn default_title() {
        assert_eq!(PageShell::default().title(), "SwasthyaSetu Health Monitoring");
    }
}
