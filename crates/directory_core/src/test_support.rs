use shared::domain::{Clinic, ClinicAddress, Doctor, Speciality};

pub(crate) fn doctor(name: &str, fees: &str, experience: &str) -> Doctor {
    Doctor {
        fees: fees.to_string(),
        experience: experience.to_string(),
        ..Doctor::new(name)
    }
}

pub(crate) fn with_mode(mut doctor: Doctor, mode: &str) -> Doctor {
    doctor.mode = Some(mode.to_string());
    doctor
}

pub(crate) fn with_specialities(mut doctor: Doctor, names: &[&str]) -> Doctor {
    doctor.specialities = names
        .iter()
        .map(|name| Speciality {
            name: name.to_string(),
        })
        .collect();
    doctor
}

pub(crate) fn with_clinic(mut doctor: Doctor, name: &str, locality: Option<&str>) -> Doctor {
    doctor.clinic = Some(Clinic {
        name: name.to_string(),
        address: Some(ClinicAddress {
            locality: locality.map(str::to_string),
        }),
    });
    doctor
}

/// Dr. A (fees 100, 5 years) and Dr. B (fees 50, 10 years).
pub(crate) fn two_doctors() -> Vec<Doctor> {
    vec![doctor("Dr. A", "100", "5"), doctor("Dr. B", "50", "10")]
}

pub(crate) fn mixed_roster() -> Vec<Doctor> {
    let video = "Video Consultation";
    let in_clinic = "In-clinic Consultation";
    vec![
        with_specialities(
            with_mode(doctor("Dr. Meera Iyer", "₹ 700", "12 Years of experience"), video),
            &["Cardiology", "General Physician"],
        ),
        with_specialities(
            with_mode(doctor("Dr. Arjun Rao", "₹ 300", "4 Years of experience"), in_clinic),
            &["Dentist"],
        ),
        with_specialities(
            with_mode(doctor("Dr. Kavya Menon", "₹ 500", "20 Years of experience"), video),
            &["Cardiology"],
        ),
        with_mode(doctor("Dr. Rahul Shah", "Free", "New"), in_clinic),
    ]
}

pub(crate) fn names(doctors: &[Doctor]) -> Vec<&str> {
    doctors.iter().map(|d| d.name.as_str()).collect()
}
