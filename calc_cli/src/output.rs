//! Terminal formatting

use calc_core::calculations::{HollowSectionInput, HollowSectionResult, ShapeExtras, ShapeKind};
use calc_core::materials::Material;
use calc_core::record::dimensions_label;
use calc_core::store::SavedCalcs;

pub fn print_result(input: &HollowSectionInput, result: &HollowSectionResult, precision: usize) {
    println!("═══════════════════════════════════════");
    println!("  {} {}", input.section.kind(), dimensions_label(input));
    println!("═══════════════════════════════════════");
    println!("  Density:     {} kg/m³", input.params.density_kg_m3);
    println!("  Wall area:   {:.3} mm²", result.wall_area_mm2);
    println!("  Weight:      {}", result.linear_mass());

    match result.extras {
        ShapeExtras::InnerDiameter { id_mm } => println!("  Inner dia.:  {:.2} mm", id_mm),
        ShapeExtras::InnerSide { side_mm } => println!("  Inner side:  {:.2} mm", side_mm),
        ShapeExtras::InnerRectangle {
            length_mm,
            width_mm,
        } => println!("  Inner:       {:.2} × {:.2} mm", length_mm, width_mm),
        ShapeExtras::InnerEllipse { major_mm, minor_mm } => {
            println!("  Inner axes:  {:.2} × {:.2} mm", major_mm, minor_mm)
        }
        ShapeExtras::Inradius { inradius_mm } => println!("  Inradius:    {:.3} mm", inradius_mm),
    }

    let mp = result.mother_pipe;
    println!(
        "  Mother pipe: OD {:.*} mm ({} match)",
        precision, mp.od_mm, mp.method
    );
    if let Some(id) = mp.id_mm {
        println!("               ID {:.*} mm", precision, id);
    }
}

pub fn print_saved(saved: &SavedCalcs, only: Option<ShapeKind>) {
    let shapes: Vec<ShapeKind> = match only {
        Some(shape) => vec![shape],
        None => ShapeKind::ALL.to_vec(),
    };

    for shape in shapes {
        let bucket = saved.bucket(shape);
        println!("{} ({})", shape, bucket.len());
        if bucket.is_empty() {
            println!("  No saved items yet.");
        }
        for (index, record) in bucket.iter().enumerate() {
            println!(
                "  #{:<3} {} | {} | {:.3} kg/m",
                index, record.name, record.dimensions_str, record.weight
            );
        }
    }
}

pub fn print_materials() {
    for material in Material::ALL {
        println!(
            "  {:<16} {:<16} {:>6} kg/m³",
            material.key(),
            material.display_name(),
            material.density_kg_m3()
        );
    }
}
