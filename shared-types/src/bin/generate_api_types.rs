use shared_types::*;
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for the GUI
    let mut types = Vec::new();

    // Lead types
    types.push(clean_type(Lead::export_to_string()?));
    types.push(clean_type(Platform::export_to_string()?));
    types.push(clean_type(LeadStatus::export_to_string()?));
    types.push(clean_type(LeadScore::export_to_string()?));
    types.push(clean_type(IntentLevel::export_to_string()?));
    types.push(clean_type(CreateLeadRequest::export_to_string()?));
    types.push(clean_type(LeadsResponse::export_to_string()?));

    // Filter types
    types.push(clean_type(LeadFilter::export_to_string()?));

    // Metrics types
    types.push(clean_type(DashboardMetrics::export_to_string()?));
    types.push(clean_type(StatusCount::export_to_string()?));
    types.push(clean_type(PlatformCount::export_to_string()?));
    types.push(clean_type(ScoreCount::export_to_string()?));
    types.push(clean_type(TeamMemberStats::export_to_string()?));
    types.push(clean_type(TrendPoint::export_to_string()?));

    // Navigation types
    types.push(clean_type(Screen::export_to_string()?));

    // Activity types
    types.push(clean_type(ActivityKind::export_to_string()?));
    types.push(clean_type(ActivityEntry::export_to_string()?));

    // Insight types
    types.push(clean_type(FollowUpWindow::export_to_string()?));
    types.push(clean_type(ScorePreview::export_to_string()?));

    // Catalog types
    types.push(clean_type(Catalog::export_to_string()?));

    let output_dir = Path::new("../gui/src/api-types");
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    // Check if the type definition includes imports (like Lead which imports Platform)
    let lines: Vec<&str> = type_def.lines().collect();
    let has_import = lines
        .iter()
        .any(|line| line.trim().starts_with("import type"));

    let filtered: Vec<&str> = lines
        .iter()
        .filter(|line| {
            let trimmed = line.trim();
            // Keep import lines if they're part of a type definition
            if trimmed.starts_with("import type") {
                return has_import;
            }
            // Filter out the generated comment line
            !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .cloned()
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
