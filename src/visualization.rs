use colored::Colorize;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table,
};

use crate::models::{SpeciesInfo, TreeRecord, TreeStatus, SPECIES_VOCABULARY};

/// Format the loaded records as a table, as a string.
///
/// Known species codes are annotated with their common names; anything
/// else is shown as written in the source sheet.
pub fn format_record_table(records: &[TreeRecord]) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Tree Records".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Tree ID", "Species", "DBH (cm)", "Height (m)", "Status"]);

    for record in records {
        let species = match SpeciesInfo::lookup(record.species()) {
            Some(info) => info.to_string(),
            None => record.species().to_string(),
        };
        table.add_row(vec![
            Cell::new(record.tree_id().unwrap_or("-")),
            Cell::new(species),
            Cell::new(format!("{:.1}", record.dbh())),
            Cell::new(format!("{:.1}", record.height())),
            Cell::new(record.status().to_string()),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the loaded records as a formatted table.
pub fn print_record_table(records: &[TreeRecord]) {
    print!("{}", format_record_table(records));
}

/// Format the species code vocabulary as a string.
pub fn format_species_guide() -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Species Codes".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Code", "Common Name", "Scientific Name"]);

    for species in SPECIES_VOCABULARY {
        table.add_row(vec![
            Cell::new(species.code),
            Cell::new(species.common_name),
            Cell::new(species.scientific_name),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the species code vocabulary.
pub fn print_species_guide() {
    print!("{}", format_species_guide());
}

/// Format the status code vocabulary as a string.
pub fn format_status_guide() -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Status Codes".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["COD_Status", "Tree Status", "Notes"]);

    let statuses = [
        (TreeStatus::Alive, ""),
        (TreeStatus::Dead, ""),
        (
            TreeStatus::Missing,
            "relevant in stands planted with a regular step",
        ),
        (TreeStatus::Stump, ""),
    ];
    for (status, note) in statuses {
        table.add_row(vec![
            Cell::new(status.code().map(|c| c.to_string()).unwrap_or_default()),
            Cell::new(status.to_string()),
            Cell::new(note),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the status code vocabulary.
pub fn print_status_guide() {
    print!("{}", format_status_guide());
}

/// Instructions describing the expected input file layout.
pub fn format_input_guide() -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Input Format".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));
    output.push_str(
        "\nThis tool characterizes a tree stand from the accurate\n\
         measurements of the trees in a plot. Each tree is one row of a\n\
         CSV file (tree_data.csv by default) with five columns:\n\n\
         \x20 tree_ID     sequential number uniquely identifying the tree\n\
         \x20 species     species code (see the species table)\n\
         \x20 DBH         trunk diameter at breast height (1.30 m), in centimeters\n\
         \x20 height      total tree height, in meters\n\
         \x20 COD_Status  tree status code (see the status table)\n\n\
         Provide at least one of DBH/height for each measured tree.\n\
         Missing or unreadable measurements are imported as 0.0 rather\n\
         than rejected, so a partially measured plot still loads.\n",
    );
    output
}

/// Print the input format instructions.
pub fn print_input_guide() {
    print!("{}", format_input_guide());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<TreeRecord> {
        vec![
            TreeRecord::new(
                Some("1".to_string()),
                "Pb".to_string(),
                25.4,
                18.2,
                TreeStatus::Alive,
            ),
            TreeRecord::new(
                Some("2".to_string()),
                "Xy".to_string(),
                0.0,
                12.7,
                TreeStatus::Unrecognized("5".to_string()),
            ),
            TreeRecord::new(None, "Unknown".to_string(), 30.0, 0.0, TreeStatus::Stump),
        ]
    }

    #[test]
    fn test_record_table_contains_header_and_values() {
        let output = format_record_table(&sample_records());
        assert!(output.contains("Tree Records"));
        assert!(output.contains("Tree ID"));
        assert!(output.contains("25.4"));
        assert!(output.contains("18.2"));
        assert!(output.contains("Stump"));
    }

    #[test]
    fn test_record_table_annotates_known_species() {
        let output = format_record_table(&sample_records());
        assert!(output.contains("Maritime Pine (Pb)"));
        // unknown code shown verbatim, no annotation
        assert!(output.contains("Xy"));
    }

    #[test]
    fn test_record_table_missing_id_placeholder() {
        let output = format_record_table(&sample_records());
        assert!(output.contains('-'));
    }

    #[test]
    fn test_record_table_empty() {
        let output = format_record_table(&[]);
        assert!(output.contains("Tree Records"));
    }

    #[test]
    fn test_species_guide_lists_vocabulary() {
        let output = format_species_guide();
        for species in SPECIES_VOCABULARY {
            assert!(output.contains(species.code));
            assert!(output.contains(species.common_name));
        }
    }

    #[test]
    fn test_status_guide_lists_codes() {
        let output = format_status_guide();
        for name in ["Alive", "Dead", "Missing", "Stump"] {
            assert!(output.contains(name));
        }
        assert!(output.contains('4'));
    }

    #[test]
    fn test_input_guide_names_columns() {
        let output = format_input_guide();
        for column in ["tree_ID", "species", "DBH", "height", "COD_Status"] {
            assert!(output.contains(column));
        }
        assert!(output.contains("tree_data.csv"));
    }
}
