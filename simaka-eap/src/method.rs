//! EAP-SIM / EAP-AKA / EAP-AKA' method descriptors
//!
//! The three methods share one envelope codec. What differs between them is
//! plain data: the legal subtypes, which attributes the attribute factory
//! understands, and how many RANDs AT_RAND may carry. Each [`EapMethod`] maps
//! to a static [`MethodDescriptor`] holding that data.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::attribute::AttributeType;

/// Subtype codes (RFC 4186 Section 11, RFC 4187 Section 11)
pub mod subtype {
    /// AKA-Challenge
    pub const AKA_CHALLENGE: u8 = 1;
    /// AKA-Authentication-Reject
    pub const AKA_AUTHENTICATION_REJECT: u8 = 2;
    /// AKA-Synchronization-Failure
    pub const AKA_SYNCHRONIZATION_FAILURE: u8 = 4;
    /// AKA-Identity
    pub const AKA_IDENTITY: u8 = 5;
    /// SIM-Start
    pub const SIM_START: u8 = 10;
    /// SIM-Challenge
    pub const SIM_CHALLENGE: u8 = 11;
    /// Notification, shared by all three methods
    pub const NOTIFICATION: u8 = 12;
    /// Re-authentication, shared by all three methods
    pub const REAUTHENTICATION: u8 = 13;
    /// Client-Error, shared by all three methods
    pub const CLIENT_ERROR: u8 = 14;
}

/// Static description of one method variant
#[derive(Debug)]
pub struct MethodDescriptor {
    /// Human readable method name
    pub name: &'static str,
    /// EAP method type number
    pub eap_type: u8,
    /// Legal subtypes and their names
    pub subtypes: &'static [(u8, &'static str)],
    /// Attribute groups the attribute factory decodes for this method
    pub attributes: &'static [&'static [AttributeType]],
    /// Number of RAND values AT_RAND may carry
    pub rand_count: RangeInclusive<usize>,
}

const COMMON_ATTRIBUTES: &[AttributeType] = &[
    AttributeType::AtPadding,
    AttributeType::AtPermanentIdReq,
    AttributeType::AtMac,
    AttributeType::AtNotification,
    AttributeType::AtAnyIdReq,
    AttributeType::AtIdentity,
    AttributeType::AtFullauthIdReq,
    AttributeType::AtCounter,
    AttributeType::AtCounterTooSmall,
    AttributeType::AtNonceS,
    AttributeType::AtClientErrorCode,
    AttributeType::AtIv,
    AttributeType::AtEncrData,
    AttributeType::AtNextPseudonym,
    AttributeType::AtNextReauthId,
    AttributeType::AtResultInd,
];

const SIM_ATTRIBUTES: &[AttributeType] = &[
    AttributeType::AtRand,
    AttributeType::AtNonceMt,
    AttributeType::AtVersionList,
    AttributeType::AtSelectedVersion,
];

const AKA_ATTRIBUTES: &[AttributeType] = &[
    AttributeType::AtRand,
    AttributeType::AtAutn,
    AttributeType::AtRes,
    AttributeType::AtAuts,
    AttributeType::AtCheckcode,
    AttributeType::AtBidding,
];

const AKA_PRIME_ATTRIBUTES: &[AttributeType] = &[AttributeType::AtKdfInput, AttributeType::AtKdf];

const SIM_SUBTYPES: &[(u8, &str)] = &[
    (subtype::SIM_START, "Start"),
    (subtype::SIM_CHALLENGE, "Challenge"),
    (subtype::NOTIFICATION, "Notification"),
    (subtype::REAUTHENTICATION, "Re-authentication"),
    (subtype::CLIENT_ERROR, "Client-Error"),
];

const AKA_SUBTYPES: &[(u8, &str)] = &[
    (subtype::AKA_CHALLENGE, "Challenge"),
    (subtype::AKA_AUTHENTICATION_REJECT, "Authentication-Reject"),
    (subtype::AKA_SYNCHRONIZATION_FAILURE, "Synchronization-Failure"),
    (subtype::AKA_IDENTITY, "Identity"),
    (subtype::NOTIFICATION, "Notification"),
    (subtype::REAUTHENTICATION, "Re-authentication"),
    (subtype::CLIENT_ERROR, "Client-Error"),
];

static SIM: MethodDescriptor = MethodDescriptor {
    name: "EAP-SIM",
    eap_type: 18,
    subtypes: SIM_SUBTYPES,
    attributes: &[COMMON_ATTRIBUTES, SIM_ATTRIBUTES],
    rand_count: 2..=3,
};

static AKA: MethodDescriptor = MethodDescriptor {
    name: "EAP-AKA",
    eap_type: 23,
    subtypes: AKA_SUBTYPES,
    attributes: &[COMMON_ATTRIBUTES, AKA_ATTRIBUTES],
    rand_count: 1..=1,
};

static AKA_PRIME: MethodDescriptor = MethodDescriptor {
    name: "EAP-AKA'",
    eap_type: 50,
    subtypes: AKA_SUBTYPES,
    attributes: &[COMMON_ATTRIBUTES, AKA_ATTRIBUTES, AKA_PRIME_ATTRIBUTES],
    rand_count: 1..=1,
};

/// EAP method whose type data is being encoded or decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EapMethod {
    /// EAP-SIM (RFC 4186)
    Sim,
    /// EAP-AKA (RFC 4187)
    Aka,
    /// EAP-AKA' (RFC 5448 / RFC 9048)
    AkaPrime,
}

impl EapMethod {
    /// All methods, in EAP type order
    pub const ALL: [EapMethod; 3] = [EapMethod::Sim, EapMethod::Aka, EapMethod::AkaPrime];

    /// The method's descriptor table
    pub fn descriptor(self) -> &'static MethodDescriptor {
        match self {
            EapMethod::Sim => &SIM,
            EapMethod::Aka => &AKA,
            EapMethod::AkaPrime => &AKA_PRIME,
        }
    }

    /// Method for an EAP type number, if it is one of ours
    pub fn from_eap_type(eap_type: u8) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.descriptor().eap_type == eap_type)
    }

    /// EAP type number
    pub fn eap_type(self) -> u8 {
        self.descriptor().eap_type
    }

    /// Method name, e.g. `EAP-AKA'`
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Whether `subtype` is legal for this method
    pub fn supports_subtype(self, subtype: u8) -> bool {
        self.subtype_name(subtype).is_some()
    }

    /// Name of `subtype`, if legal for this method
    pub fn subtype_name(self, subtype: u8) -> Option<&'static str> {
        self.descriptor()
            .subtypes
            .iter()
            .find(|(code, _)| *code == subtype)
            .map(|(_, name)| *name)
    }

    /// Whether the method's attribute factory decodes `attribute`
    pub fn supports_attribute(self, attribute: AttributeType) -> bool {
        self.descriptor()
            .attributes
            .iter()
            .any(|group| group.contains(&attribute))
    }

    /// Whether AT_RAND may carry `count` RAND values
    pub fn accepts_rand_count(self, count: usize) -> bool {
        self.descriptor().rand_count.contains(&count)
    }
}

impl fmt::Display for EapMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EapMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sim" | "eap-sim" => Ok(EapMethod::Sim),
            "aka" | "eap-aka" => Ok(EapMethod::Aka),
            "aka-prime" | "aka'" | "eap-aka'" | "eap-aka-prime" => Ok(EapMethod::AkaPrime),
            _ => Err(format!("unknown EAP method: {s}")),
        }
    }
}
