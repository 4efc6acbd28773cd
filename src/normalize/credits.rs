//! Credits, notes and company text blocks.

use crate::models::{ArtistCredit, Company, RawRelease};

use super::artist::credit_name;
use super::field::normalize_str;
use super::patterns::strip_disambiguator;

const CRLF: &str = "\r\n";

/// One line per extra artist: `"Jane Doe (Mixed By)"`.
pub fn extra_credits(extraartists: &[ArtistCredit]) -> Vec<String> {
    extraartists
        .iter()
        .map(|credit| {
            let role = credit.role.trim();
            let role = if role.is_empty() {
                String::new()
            } else {
                format!("({})", role)
            };

            [credit_name(credit), role]
                .into_iter()
                .filter(|piece| !piece.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|line| !line.is_empty())
        .collect()
}

/// Credits of a single track, `;`-separated.
pub fn track_credits(extraartists: &[ArtistCredit]) -> String {
    extra_credits(extraartists).join(";").trim().to_string()
}

/// `Credits:` block, empty without extra artists.
pub fn credits_block(extraartists: &[ArtistCredit]) -> String {
    let lines = extra_credits(extraartists).join(CRLF);
    if lines.is_empty() {
        String::new()
    } else {
        format!("Credits:{CRLF}{lines}{CRLF}")
    }
}

/// `Notes:` block, empty without notes.
pub fn notes_block(notes: &str) -> String {
    match normalize_str(notes) {
        Some(notes) => format!("Notes:{CRLF}{notes}{CRLF}"),
        None => String::new(),
    }
}

fn company_line(company: &Company) -> String {
    let name = strip_disambiguator(&company.name).trim().to_string();
    let entity = company.entity_type_name.trim();
    let catno = company.catno.trim();

    if catno.is_empty() {
        format!("{}: {}", entity, name)
    } else {
        format!("{}: {} - {}", entity, name, catno)
    }
}

/// `Companies etc.:` block, empty without companies.
pub fn companies_block(companies: &[Company]) -> String {
    let lines = companies
        .iter()
        .map(company_line)
        .collect::<Vec<_>>()
        .join(CRLF);

    if lines.is_empty() {
        String::new()
    } else {
        format!("Companies etc.:{CRLF}{lines}")
    }
}

/// Release credits text: the non-empty blocks separated by a blank line.
pub fn release_credits(release: &RawRelease) -> String {
    [
        credits_block(&release.extraartists),
        notes_block(&release.notes),
        companies_block(&release.companies),
    ]
    .into_iter()
    .filter(|block| !block.is_empty())
    .collect::<Vec<_>>()
    .join(CRLF)
    .trim()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(entity: &str, name: &str, catno: &str) -> Company {
        Company {
            name: name.to_string(),
            entity_type_name: entity.to_string(),
            catno: catno.to_string(),
        }
    }

    #[test]
    fn test_extra_credits() {
        let extra = vec![
            ArtistCredit::new("Jane Doe (3)").with_role("Mixed By"),
            ArtistCredit::new("John Roe").with_anv("J. Roe"),
        ];
        assert_eq!(extra_credits(&extra), vec!["Jane Doe (Mixed By)", "J. Roe"]);
        assert_eq!(track_credits(&extra), "Jane Doe (Mixed By);J. Roe");
        assert_eq!(track_credits(&[]), "");
    }

    #[test]
    fn test_blocks() {
        let extra = vec![ArtistCredit::new("Jane Doe").with_role("Producer")];
        assert_eq!(credits_block(&extra), "Credits:\r\nJane Doe (Producer)\r\n");
        assert_eq!(credits_block(&[]), "");
        assert_eq!(notes_block("Recorded live."), "Notes:\r\nRecorded live.\r\n");
        assert_eq!(notes_block(""), "");
    }

    #[test]
    fn test_companies_block() {
        let companies = vec![
            company("Pressed By", "Optimal Media (2)", ""),
            company("Mastered At", "Dubplates & Mastering", "D&M 123"),
        ];
        assert_eq!(
            companies_block(&companies),
            "Companies etc.:\r\nPressed By: Optimal Media\r\nMastered At: Dubplates & Mastering - D&M 123"
        );
        assert_eq!(companies_block(&[]), "");
    }

    #[test]
    fn test_release_credits() {
        let mut release = RawRelease::default();
        release.extraartists = vec![ArtistCredit::new("Jane Doe").with_role("Producer")];
        release.notes = "Limited to 500 copies.".to_string();
        release.companies = vec![company("Pressed By", "GZ", "")];

        assert_eq!(
            release_credits(&release),
            "Credits:\r\nJane Doe (Producer)\r\n\r\nNotes:\r\nLimited to 500 copies.\r\n\r\nCompanies etc.:\r\nPressed By: GZ"
        );
    }

    #[test]
    fn test_release_credits_without_notes() {
        let mut release = RawRelease::default();
        release.extraartists = vec![ArtistCredit::new("Jane Doe").with_role("Producer")];
        release.companies = vec![company("Pressed By", "GZ", "")];

        let credits = release_credits(&release);
        assert!(!credits.contains("Notes:"));
        assert_eq!(
            credits,
            "Credits:\r\nJane Doe (Producer)\r\n\r\nCompanies etc.:\r\nPressed By: GZ"
        );
        assert_eq!(release_credits(&RawRelease::default()), "");
    }
}
