use crate::domain::model::RankedSchool;
use crate::utils::error::{RankerError, Result};

pub const CSV_HEADERS: [&str; 11] = [
    "Center Code",
    "Center Type",
    "Center Name",
    "Public/Private",
    "Address",
    "Postal Code",
    "Municipality",
    "Province",
    "Distance (Km)",
    "Duration",
    "Language Program",
];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Renders the ranking as UTF-8 CSV with a byte-order mark, one row per school.
pub fn render_csv(schools: &[RankedSchool]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(UTF8_BOM.to_vec());
    writer.write_record(CSV_HEADERS)?;

    for entry in schools {
        let school = &entry.school;
        writer.write_record([
            school.code.as_str(),
            school.center_type.as_str(),
            school.name.as_str(),
            school.ownership.as_str(),
            school.address.as_str(),
            school.postal_code.as_str(),
            school.municipality.as_str(),
            school.province.as_str(),
            school.distance_text().unwrap_or_default(),
            school.duration_text().unwrap_or_default(),
            school.language_program.as_str(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| RankerError::IoError(std::io::Error::other(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{School, SchoolRecord, Travel};

    fn ranked(code: &str, address: &str, minutes: u64) -> RankedSchool {
        let record = SchoolRecord {
            code: Some(code.to_string()),
            denomination: Some("Instituto de Educación Secundaria".to_string()),
            address: Some(address.to_string()),
            postal_code: Some("18194".to_string()),
            municipality: Some("Churriana de la Vega".to_string()),
            province: Some("Granada".to_string()),
            ..Default::default()
        };
        RankedSchool {
            school: School::from_record(&record).with_travel(Travel {
                distance_text: "3,1 km".to_string(),
                distance_meters: 3_100,
                duration_text: format!("{} min", minutes),
            }),
            duration_minutes: minutes,
        }
    }

    #[test]
    fn test_render_starts_with_bom_and_header() {
        let bytes = render_csv(&[]).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert_eq!(
            text.lines().next().unwrap(),
            "Center Code,Center Type,Center Name,Public/Private,Address,Postal Code,Municipality,Province,Distance (Km),Duration,Language Program"
        );
    }

    #[test]
    fn test_render_rows_in_given_order_and_quotes_commas() {
        let rows = vec![ranked("B", "Calle Sol, 2", 5), ranked("A", "Calle Luna 1", 9)];
        let bytes = render_csv(&rows).unwrap();

        let mut reader = csv::Reader::from_reader(&bytes[UTF8_BOM.len()..]);
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][0], "B");
        assert_eq!(&records[0][4], "Calle Sol, 2");
        assert_eq!(&records[0][9], "5 min");
        assert_eq!(&records[1][0], "A");
        assert_eq!(&records[1][8], "3,1 km");
    }
}
