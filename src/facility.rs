use std::str::FromStr;

use crate::Error;

/// Syslog facilities. Taken from RFC 5424, but I've heard that some platforms mix these around.
/// Names for 13-15 follow the common Linux/Solaris spelling; the RFC's own
/// labels (audit, alert, clock daemon) are accepted as input aliases.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Ord, PartialOrd)]
#[allow(non_camel_case_types)]
pub enum Facility {
    KERN = 0,
    USER = 1,
    MAIL = 2,
    DAEMON = 3,
    AUTH = 4,
    SYSLOG = 5,
    LPR = 6,
    NEWS = 7,
    UUCP = 8,
    CRON = 9,
    AUTHPRIV = 10,
    FTP = 11,
    NTP = 12,
    SECURITY = 13,
    CONSOLE = 14,
    SOLARIS_CRON = 15,
    LOCAL0 = 16,
    LOCAL1 = 17,
    LOCAL2 = 18,
    LOCAL3 = 19,
    LOCAL4 = 20,
    LOCAL5 = 21,
    LOCAL6 = 22,
    LOCAL7 = 23,
}

/// Convert an int (as used in the wire serialization) into a `Facility`
impl TryFrom<i32> for Facility {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        let fac = match value {
            0 => Facility::KERN,
            1 => Facility::USER,
            2 => Facility::MAIL,
            3 => Facility::DAEMON,
            4 => Facility::AUTH,
            5 => Facility::SYSLOG,
            6 => Facility::LPR,
            7 => Facility::NEWS,
            8 => Facility::UUCP,
            9 => Facility::CRON,
            10 => Facility::AUTHPRIV,
            11 => Facility::FTP,
            12 => Facility::NTP,
            13 => Facility::SECURITY,
            14 => Facility::CONSOLE,
            15 => Facility::SOLARIS_CRON,
            16 => Facility::LOCAL0,
            17 => Facility::LOCAL1,
            18 => Facility::LOCAL2,
            19 => Facility::LOCAL3,
            20 => Facility::LOCAL4,
            21 => Facility::LOCAL5,
            22 => Facility::LOCAL6,
            23 => Facility::LOCAL7,
            _ => return Err(Error::OutOfRangeFacility(value)),
        };

        Ok(fac)
    }
}

/// Case-insensitive lookup by name, including the historical aliases some
/// syslog daemons still write into their configs.
impl FromStr for Facility {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fac = match s.to_ascii_lowercase().as_str() {
            "kern" => Facility::KERN,
            "user" => Facility::USER,
            "mail" => Facility::MAIL,
            "daemon" => Facility::DAEMON,
            "auth" => Facility::AUTH,
            "syslog" => Facility::SYSLOG,
            "lpr" => Facility::LPR,
            "news" => Facility::NEWS,
            "uucp" => Facility::UUCP,
            "cron" => Facility::CRON,
            "authpriv" => Facility::AUTHPRIV,
            "ftp" => Facility::FTP,
            "ntp" => Facility::NTP,
            "security" | "audit" => Facility::SECURITY,
            "console" | "alert" => Facility::CONSOLE,
            "solaris-cron" | "clockd" | "at" => Facility::SOLARIS_CRON,
            "local0" => Facility::LOCAL0,
            "local1" => Facility::LOCAL1,
            "local2" => Facility::LOCAL2,
            "local3" => Facility::LOCAL3,
            "local4" => Facility::LOCAL4,
            "local5" => Facility::LOCAL5,
            "local6" => Facility::LOCAL6,
            "local7" => Facility::LOCAL7,
            _ => return Err(Error::UnknownFacility(s.to_string())),
        };

        Ok(fac)
    }
}

impl TryFrom<&str> for Facility {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Facility {
    /// Convert a syslog facility into a unique string representation
    pub fn as_str(self) -> &'static str {
        match self {
            Facility::KERN => "kern",
            Facility::USER => "user",
            Facility::MAIL => "mail",
            Facility::DAEMON => "daemon",
            Facility::AUTH => "auth",
            Facility::SYSLOG => "syslog",
            Facility::LPR => "lpr",
            Facility::NEWS => "news",
            Facility::UUCP => "uucp",
            Facility::CRON => "cron",
            Facility::AUTHPRIV => "authpriv",
            Facility::FTP => "ftp",
            Facility::NTP => "ntp",
            Facility::SECURITY => "security",
            Facility::CONSOLE => "console",
            Facility::SOLARIS_CRON => "solaris-cron",
            Facility::LOCAL0 => "local0",
            Facility::LOCAL1 => "local1",
            Facility::LOCAL2 => "local2",
            Facility::LOCAL3 => "local3",
            Facility::LOCAL4 => "local4",
            Facility::LOCAL5 => "local5",
            Facility::LOCAL6 => "local6",
            Facility::LOCAL7 => "local7",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Facility;
    use crate::Error;

    #[test]
    fn test_deref() {
        assert_eq!(Facility::KERN.as_str(), "kern");
        assert_eq!(Facility::SOLARIS_CRON.as_str(), "solaris-cron");
    }

    #[test]
    fn from_int() {
        for i in 0..=23 {
            let fac = Facility::try_from(i).unwrap();
            assert_eq!(fac as i32, i);
        }

        assert_eq!(Facility::try_from(-1), Err(Error::OutOfRangeFacility(-1)));
        assert_eq!(Facility::try_from(24), Err(Error::OutOfRangeFacility(24)));
        assert_eq!(Facility::try_from(666), Err(Error::OutOfRangeFacility(666)));
    }

    #[test]
    fn from_name() {
        // every canonical name round-trips
        for i in 0..=23 {
            let fac = Facility::try_from(i).unwrap();
            assert_eq!(fac.as_str().parse::<Facility>().unwrap(), fac);
        }

        // case-insensitive, plus aliases
        assert_eq!("LOCAL0".parse::<Facility>().unwrap(), Facility::LOCAL0);
        assert_eq!("audit".parse::<Facility>().unwrap(), Facility::SECURITY);
        assert_eq!("alert".parse::<Facility>().unwrap(), Facility::CONSOLE);
        assert_eq!("at".parse::<Facility>().unwrap(), Facility::SOLARIS_CRON);
        assert_eq!("clockd".parse::<Facility>().unwrap(), Facility::SOLARIS_CRON);

        assert_eq!(
            "mir space station".parse::<Facility>(),
            Err(Error::UnknownFacility("mir space station".to_string()))
        );
    }
}
