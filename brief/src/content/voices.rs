use serde::Serialize;

/// Testimonial shown in the voices carousel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoiceEntry {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub static VOICES: &[VoiceEntry] = &[
    VoiceEntry {
        quote: "When there\u{2019}s no union, we stay quiet about unsafe ratios because we\u{2019}re afraid of losing our jobs. That silence puts patients in danger.",
        name: "Ann H., RN",
        role: "Cardiovascular Nurse, Norton Audubon",
    },
    VoiceEntry {
        quote: "Every time a nurse leaves, the hospital spends thousands on recruiters instead of staffing. A union would make retention the priority Louisville families deserve.",
        name: "Marcus L.",
        role: "South Louisville parent & small business owner",
    },
    VoiceEntry {
        quote: "As clergy, I\u{2019}ve sat with families who waited hours for a bed. Standing with nurses is standing up for the community\u{2019}s moral obligation to safe care.",
        name: "Rev. Carla R.",
        role: "Clergy for Safe Staffing Louisville",
    },
    VoiceEntry {
        quote: "The legal delays showed me management will stretch the law to the breaking point. Only a contract gives nurses the teeth to enforce safe staffing.",
        name: "Kay T.",
        role: "Nurse Organizer & UCW-KY member",
    },
];
