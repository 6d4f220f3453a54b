//! Page stylesheet

/// Inline stylesheet for the dashboard page.
///
/// Cards take the full width on small viewports; from 768px up a card
/// covers `span-N` of 12 grid columns.
pub const STYLESHEET: &str = r#"
:root {
  --bg: #f8f9fa;
  --card: #ffffff;
  --border: #dee2e6;
  --text: #212529;
  --dimmed: #868e96;
  --danger: #fa5252;
  --danger-bg: #fff5f5;
}
* { box-sizing: border-box; }
body {
  margin: 0;
  padding: 24px;
  background: var(--bg);
  color: var(--text);
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
  font-size: 14px;
}
header.page-header { margin-bottom: 20px; }
header.page-header h1 { margin: 0 0 4px; font-size: 26px; }
header.page-header p { margin: 0; color: var(--dimmed); }

.widget-grid { display: grid; grid-template-columns: repeat(12, minmax(0, 1fr)); gap: 16px; }
.col { grid-column: span 12; min-width: 0; }
@media (min-width: 768px) {
  .span-1 { grid-column: span 1; }
  .span-2 { grid-column: span 2; }
  .span-3 { grid-column: span 3; }
  .span-4 { grid-column: span 4; }
  .span-5 { grid-column: span 5; }
  .span-6 { grid-column: span 6; }
  .span-7 { grid-column: span 7; }
  .span-8 { grid-column: span 8; }
  .span-9 { grid-column: span 9; }
  .span-10 { grid-column: span 10; }
  .span-11 { grid-column: span 11; }
  .span-12 { grid-column: span 12; }
}

.card {
  height: 100%;
  padding: 16px;
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: 8px;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
}
.card-title { margin: 0 0 12px; font-size: 16px; font-weight: 600; }

.alert { padding: 12px; border-radius: 6px; border: 1px solid var(--border); }
.alert p { margin: 4px 0 0; }
.alert-error { background: var(--danger-bg); border-color: var(--danger); color: #c92a2a; }
.alert-muted { color: var(--dimmed); background: var(--bg); }
.no-data { margin: 24px 0; text-align: center; color: var(--dimmed); }

.stat-row { display: flex; align-items: center; justify-content: space-between; gap: 8px; }
.stat-value { font-size: 28px; font-weight: 700; }
.stat-description { margin: 6px 0 0; color: var(--dimmed); font-size: 13px; }
.stat-details summary { cursor: pointer; color: var(--dimmed); }
.badge {
  padding: 2px 10px;
  border: 1px solid;
  border-radius: 999px;
  font-size: 12px;
  font-weight: 600;
  white-space: nowrap;
}
hr { border: 0; border-top: 1px solid var(--border); margin: 12px 0; }

.table-wrap { overflow-x: auto; }
.data-table { width: 100%; border-collapse: collapse; }
.data-table th, .data-table td { padding: 6px 10px; text-align: left; }
.data-table.bordered th, .data-table.bordered td { border: 1px solid var(--border); }
.data-table.compact { font-size: 12px; margin-top: 8px; }
.data-table.compact th { text-transform: capitalize; }
.data-table.striped tbody tr:nth-child(odd) { background: var(--bg); }
.trend-up { color: #12b886; }
.trend-down { color: #fa5252; }

.chart svg { width: 100%; height: auto; }
.chart .grid { stroke: var(--border); stroke-dasharray: 3 3; }
.chart .axis-label { fill: var(--dimmed); font-size: 11px; }
.donut svg { max-width: 240px; display: block; margin: 0 auto; }
.donut-empty { stroke: var(--border); }
.donut-label { fill: var(--dimmed); font-size: 12px; }
.donut-total { font-size: 20px; font-weight: 700; }
.legend {
  list-style: none; display: flex; flex-wrap: wrap; gap: 12px; padding: 0; margin: 8px 0 0;
}
.legend li { display: flex; align-items: center; gap: 6px; }
.swatch { width: 10px; height: 10px; border-radius: 2px; display: inline-block; }
.dimmed { color: var(--dimmed); }

#loading-overlay {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(255, 255, 255, 0.8);
  z-index: 10;
}
.spinner {
  width: 40px;
  height: 40px;
  border: 4px solid var(--border);
  border-top-color: #228be6;
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }
.load-failed { max-width: 640px; margin: 48px auto; }

footer.page-footer { margin-top: 24px; color: var(--dimmed); font-size: 12px; }

@media print {
  body { background: #fff; padding: 0; }
  .card { box-shadow: none; break-inside: avoid; }
  .stat-details summary { display: none; }
  #loading-overlay { display: none; }
}
"#;
