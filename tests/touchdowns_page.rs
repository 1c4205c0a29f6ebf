// tests/touchdowns_page.rs
//
// End-to-end extraction over a realistic page fixture: navigation chrome,
// a thead-wrapped stats table, separator rows, and messy player cells.

use stat_scrape::report;
use stat_scrape::specs::touchdowns::{extract_records, select_table};

const PAGE: &str = r#"
<html>
<body>
  <table class="nav">
    <tr><td>Home</td><td>Scores</td></tr>
  </table>

  <table class="TableBase-table">
    <thead>
      <tr>
        <th>Rank</th><th>Player</th><th>Pos</th><th>Team</th>
        <th>Games</th><th>Rush</th><th>Rec</th><th>TD</th>
      </tr>
    </thead>
    <tbody>
      <tr>
        <td>1</td>
        <td><a href="/nfl/players/1/">P. Mahomes</a> KC &middot; QB</td>
        <td>17</td><td>3</td><td>0</td><td>16</td>
      </tr>
      <tr class="TableBase-bodyTr">
        <td>2</td>
        <td><a href="/nfl/players/2/">C. McCaffrey</a> SF | RB</td>
        <td>16</td><td>14</td><td>7</td><td>21</td>
      </tr>
      <tr><td colspan="6">Advertisement</td></tr>
      <tr>
        <td>3</td>
        <td>Anchorless Player NE WR</td>
        <td>17</td><td>2</td><td>9</td><td>11</td>
      </tr>
      <tr>
        <td>-</td>
        <td><a href="/nfl/players/4/">N. Stats</a> DAL TE</td>
        <td>-</td><td>-</td><td>-</td><td>-</td>
      </tr>
    </tbody>
  </table>
</body>
</html>
"#;

#[test]
fn stats_table_is_selected_over_navigation() {
    let table = select_table(PAGE).unwrap();
    assert!(table.contains("TableBase-table"));
    assert!(!table.contains("class=\"nav\""));
}

#[test]
fn records_come_out_in_page_order() {
    let table = select_table(PAGE).unwrap();
    let records = extract_records(table, 20);

    assert_eq!(records.len(), 3);

    assert_eq!(records[0].name, "P. Mahomes");
    assert_eq!(records[0].team, "KC");
    assert_eq!(records[0].position, "QB");
    assert_eq!(records[0].touchdowns, 16);

    assert_eq!(records[1].name, "C. McCaffrey");
    assert_eq!(records[1].team, "SF");
    assert_eq!(records[1].position, "RB");
    assert_eq!(records[1].touchdowns, 21);

    // No anchor: the whole cell is the name, nothing left to classify.
    assert_eq!(records[2].name, "Anchorless Player NE WR");
    assert_eq!(records[2].team, "");
    assert_eq!(records[2].touchdowns, 11);
}

#[test]
fn limit_cuts_off_early() {
    let table = select_table(PAGE).unwrap();
    let records = extract_records(table, 1);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "P. Mahomes");
}

#[test]
fn rendered_report_is_aligned() {
    let table = select_table(PAGE).unwrap();
    let records = extract_records(table, 20);
    let out = report::render_touchdowns(&records);

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 5); // title + column header + 3 rows
    assert!(lines[2].starts_with("1   P. Mahomes"));
    assert!(lines[3].starts_with("2   C. McCaffrey"));
    // TD column is right-aligned at a fixed offset
    let td_col = lines[1].len() - 3;
    assert_eq!(&lines[2][td_col..], " 16");
    assert_eq!(&lines[3][td_col..], " 21");
}

#[test]
fn tableless_page_reports_no_results() {
    let doc = "<html><body><p>Down for maintenance</p></body></html>";
    assert!(select_table(doc).is_err());
    let out = report::render_touchdowns(&[]);
    assert!(out.contains(report::NO_TABLE_RESULTS));
}
