//! HTML template constants for the `HtmlExporter`.
//!
//! Separates CSS styles and JavaScript code from the core rendering logic.

/// HTML document header including all CSS styles.
pub const HTML_HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Style Audit Report</title>
    <style>
        :root {
            --color-critical: #dc2626;
            --color-moderate: #d97706;
            --color-minor: #2563eb;
            --color-bg: #f8fafc;
            --color-card: #ffffff;
            --color-border: #e2e8f0;
            --color-text: #1e293b;
            --color-text-muted: #64748b;
            --color-code-bg: #f1f5f9;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: var(--color-bg);
            color: var(--color-text);
            line-height: 1.6;
            padding: 2rem;
        }
        .container { max-width: 1200px; margin: 0 auto; }
        h1 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1.5rem; }
        h2 { font-size: 1.25rem; font-weight: 600; margin: 1.5rem 0 1rem; }
        h3 { font-size: 1rem; font-weight: 600; margin: 1.25rem 0 0.75rem; }
        .summary-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(150px, 1fr)); gap: 1rem; margin-bottom: 2rem; }
        .summary-card { background: var(--color-card); border-radius: 0.5rem; padding: 1.25rem; border: 1px solid var(--color-border); text-align: center; }
        .summary-card .value { font-size: 2rem; font-weight: 700; display: block; }
        .summary-card .label { font-size: 0.875rem; color: var(--color-text-muted); margin-top: 0.25rem; }
        .summary-card.critical .value { color: var(--color-critical); }
        .summary-card.moderate .value { color: var(--color-moderate); }
        .summary-card.minor .value { color: var(--color-minor); }
        .filter-controls { display: flex; gap: 0.5rem; margin-bottom: 1rem; flex-wrap: wrap; }
        .filter-btn { padding: 0.5rem 1rem; border: 1px solid var(--color-border); background: var(--color-card); border-radius: 0.375rem; cursor: pointer; font-size: 0.875rem; }
        .filter-btn:hover { background: var(--color-bg); }
        .filter-btn:focus-visible { outline: 2px solid var(--color-minor); outline-offset: 2px; }
        .filter-btn.active { background: var(--color-text); color: var(--color-card); border-color: var(--color-text); }
        table.categories { width: 100%; border-collapse: collapse; background: var(--color-card); border: 1px solid var(--color-border); margin-bottom: 1rem; }
        table.categories th, table.categories td { padding: 0.5rem 1rem; text-align: left; border-bottom: 1px solid var(--color-border); font-size: 0.875rem; }
        table.categories td.number { text-align: right; font-variant-numeric: tabular-nums; }
        .issue { background: var(--color-card); border: 1px solid var(--color-border); border-left-width: 4px; border-radius: 0.375rem; padding: 0.75rem 1rem; margin-bottom: 0.75rem; }
        .issue.critical { border-left-color: var(--color-critical); }
        .issue.moderate { border-left-color: var(--color-moderate); }
        .issue.minor { border-left-color: var(--color-minor); }
        .issue.hidden { display: none; }
        .issue .meta { font-size: 0.75rem; color: var(--color-text-muted); }
        .issue .location { font-family: 'SF Mono', SFMono-Regular, Consolas, 'Liberation Mono', Menlo, monospace; word-break: break-all; }
        .issue .message { margin: 0.25rem 0; }
        .issue .suggestion { font-size: 0.875rem; color: var(--color-text-muted); }
        .badge { display: inline-block; padding: 0.125rem 0.5rem; border-radius: 9999px; font-size: 0.75rem; font-weight: 600; color: var(--color-card); }
        .badge.critical { background: var(--color-critical); }
        .badge.moderate { background: var(--color-moderate); }
        .badge.minor { background: var(--color-minor); }
        pre { background: var(--color-code-bg); border-radius: 0.375rem; padding: 0.5rem 0.75rem; margin-top: 0.5rem; font-size: 0.8125rem; overflow-x: auto; }
        .recommendations li { margin-left: 1.25rem; margin-bottom: 0.25rem; }
        .footer { margin-top: 2rem; padding-top: 1rem; border-top: 1px solid var(--color-border); font-size: 0.75rem; color: var(--color-text-muted); text-align: center; }
        .no-results { padding: 2rem; text-align: center; color: var(--color-text-muted); }
        @media print {
            body { background: white; color: black; padding: 1rem; }
            .filter-controls { display: none; }
            .issue.hidden { display: block; }
            .badge { color: black; background: transparent !important; border: 1px solid currentColor; }
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Style Audit Report</h1>
"#;

/// HTML document footer including the severity filter script.
pub const HTML_FOOTER: &str = r#"        <div class="footer">
            Generated by <strong>style-audit</strong>
        </div>
    </div>
    <script>
        (function() {
            const filterBtns = document.querySelectorAll('.filter-btn');
            filterBtns.forEach(btn => {
                btn.addEventListener('click', () => {
                    filterBtns.forEach(b => b.classList.remove('active'));
                    btn.classList.add('active');
                    const filter = btn.dataset.filter;
                    document.querySelectorAll('.issue').forEach(issue => {
                        const hide = filter !== 'all' && issue.dataset.severity !== filter;
                        issue.classList.toggle('hidden', hide);
                    });
                });
            });
        })();
    </script>
</body>
</html>
"#;
