/// Represents the control endpoints exposed by Bravia devices
///
/// Each endpoint serves one capability group of the JSON control protocol,
/// except [`ServicePath::Ircc`] which speaks the legacy SOAP protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServicePath {
    /// System service - power status and control
    System,

    /// Audio service - volume and mute
    Audio,

    /// AppControl service - listing and launching applications
    AppControl,

    /// AVContent service - external inputs and content enumeration
    AvContent,

    /// IRCC service - infrared remote command codes over SOAP
    Ircc,
}

impl ServicePath {
    /// Get the name of this service as a string
    pub fn name(&self) -> &'static str {
        match self {
            ServicePath::System => "system",
            ServicePath::Audio => "audio",
            ServicePath::AppControl => "appControl",
            ServicePath::AvContent => "avContent",
            ServicePath::Ircc => "ircc",
        }
    }

    /// Get the HTTP endpoint path for this service, relative to the base URL
    pub fn path(&self) -> &'static str {
        match self {
            ServicePath::System => "/sony/system",
            ServicePath::Audio => "/sony/audio",
            ServicePath::AppControl => "/sony/appControl",
            ServicePath::AvContent => "/sony/avContent",
            ServicePath::Ircc => "/sony/ircc",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_services_have_sony_paths() {
        let services = [
            ServicePath::System,
            ServicePath::Audio,
            ServicePath::AppControl,
            ServicePath::AvContent,
            ServicePath::Ircc,
        ];

        for service in services {
            assert!(service.path().starts_with("/sony/"));
            assert!(service.path().ends_with(service.name()));
        }
    }
}
