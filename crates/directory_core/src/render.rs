//! Display model for the doctor list. Front ends draw these; nothing here
//! filters or reorders.

use std::fmt;

use shared::domain::Doctor;

pub const NO_SPECIALTY_LABEL: &str = "Specialty not specified";
pub const EMPTY_LIST_MESSAGE: &str = "No doctors found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub photo: String,
    pub name: String,
    pub specialties: String,
    pub experience: String,
    pub clinic: Option<ClinicLine>,
    pub fees: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicLine {
    pub name: String,
    pub locality: Option<String>,
}

impl CardView {
    pub fn from_doctor(doctor: &Doctor) -> Self {
        let specialties = if doctor.specialities.is_empty() {
            NO_SPECIALTY_LABEL.to_string()
        } else {
            doctor.speciality_names().collect::<Vec<_>>().join(", ")
        };

        Self {
            photo: doctor.photo.clone(),
            name: doctor.name.clone(),
            specialties,
            experience: doctor.experience.clone(),
            clinic: doctor.clinic.as_ref().map(|clinic| ClinicLine {
                name: clinic.name.clone(),
                locality: doctor.locality().map(str::to_string),
            }),
            fees: doctor.fees.clone(),
        }
    }
}

impl fmt::Display for CardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  {}", self.specialties)?;
        if !self.experience.is_empty() {
            writeln!(f, "  {}", self.experience)?;
        }
        if let Some(clinic) = &self.clinic {
            match &clinic.locality {
                Some(locality) => writeln!(f, "  {}, {}", clinic.name, locality)?,
                None => writeln!(f, "  {}", clinic.name)?,
            }
        }
        if !self.fees.is_empty() {
            writeln!(f, "  Fee: {}", self.fees)?;
        }
        if !self.photo.is_empty() {
            writeln!(f, "  Photo: {}", self.photo)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Cards(Vec<CardView>),
    Empty,
}

impl ListView {
    pub fn from_doctors(doctors: &[Doctor]) -> Self {
        if doctors.is_empty() {
            ListView::Empty
        } else {
            ListView::Cards(doctors.iter().map(CardView::from_doctor).collect())
        }
    }
}

impl fmt::Display for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListView::Empty => writeln!(f, "{EMPTY_LIST_MESSAGE}"),
            ListView::Cards(cards) => {
                for (index, card) in cards.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{card}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
