//! Era timeline: hazard arrival rates and info-bar phrases.
//!
//! The timeline is keyed by era number. Hazards stay locked until the first
//! table entry; later entries shorten the arrival delay as eras pass.

/// Era shown on the info bar when a run starts.
pub const FIRST_ERA: u32 = 1957;

/// First era in which the fire control responds.
pub const WEAPON_ERA: u32 = 2020;

/// Ticks between hazard spawns for the given era.
///
/// `None` means hazards are not unlocked yet; the spawner idles one tick and
/// asks again.
pub fn hazard_delay(era: u32) -> Option<u32> {
    match era {
        0..=1960 => None,
        1961..=1968 => Some(20),
        1969..=1980 => Some(14),
        1981..=1994 => Some(10),
        1995..=2009 => Some(8),
        2010..=2019 => Some(6),
        _ => Some(2),
    }
}

/// Flavor phrase for an era, if that era has one.
pub fn phrase(era: u32) -> Option<&'static str> {
    match era {
        1957 => Some("First Sputnik"),
        1961 => Some("Gagarin flew!"),
        1969 => Some("Armstrong got on the moon!"),
        1971 => Some("First orbital space station Salute-1"),
        1981 => Some("Flight of the Shuttle Columbia"),
        1998 => Some("ISS start building"),
        2011 => Some("Messenger launch to Mercury"),
        2020 => Some("Take the plasma gun! Shoot the debris!"),
        _ => None,
    }
}

/// Info-bar caption for an era: number plus phrase when one exists.
pub fn caption(era: u32) -> String {
    match phrase(era) {
        Some(text) => format!("{era} {text}"),
        None => era.to_string(),
    }
}
