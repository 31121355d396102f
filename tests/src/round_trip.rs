//! Round trip integration tests
//!
//! Every attribute kind a method supports survives encode then decode, and
//! hand-built wire buffers re-encode to the same bytes in the same order.

use integration_tests::test_fixtures::{
    aka_challenge_request, aka_prime_challenge_request, sim_challenge_request, sim_start_request,
    RANDS,
};
use integration_tests::{decode_ok, init_test_logging};
use simaka_eap::method::subtype;
use simaka_eap::{Attribute, AttributeType, EapMethod, TypeData};

const ALL_TYPES: [AttributeType; 27] = [
    AttributeType::AtRand,
    AttributeType::AtAutn,
    AttributeType::AtRes,
    AttributeType::AtAuts,
    AttributeType::AtPadding,
    AttributeType::AtNonceMt,
    AttributeType::AtPermanentIdReq,
    AttributeType::AtMac,
    AttributeType::AtNotification,
    AttributeType::AtAnyIdReq,
    AttributeType::AtIdentity,
    AttributeType::AtVersionList,
    AttributeType::AtSelectedVersion,
    AttributeType::AtFullauthIdReq,
    AttributeType::AtCounter,
    AttributeType::AtCounterTooSmall,
    AttributeType::AtNonceS,
    AttributeType::AtClientErrorCode,
    AttributeType::AtKdfInput,
    AttributeType::AtKdf,
    AttributeType::AtIv,
    AttributeType::AtEncrData,
    AttributeType::AtNextPseudonym,
    AttributeType::AtNextReauthId,
    AttributeType::AtCheckcode,
    AttributeType::AtResultInd,
    AttributeType::AtBidding,
];

/// A representative value of each kind
fn sample(attribute_type: AttributeType, method: EapMethod) -> Attribute {
    match attribute_type {
        AttributeType::AtRand => match method {
            EapMethod::Sim => Attribute::Rand(RANDS.to_vec()),
            _ => Attribute::Rand(vec![RANDS[0]]),
        },
        AttributeType::AtAutn => Attribute::Autn([0xA1; 16]),
        AttributeType::AtRes => Attribute::Res(vec![0xB2; 5]),
        AttributeType::AtAuts => Attribute::Auts([0xC3; 14]),
        AttributeType::AtPadding => Attribute::Padding(8),
        AttributeType::AtNonceMt => Attribute::NonceMt([0xD4; 16]),
        AttributeType::AtPermanentIdReq => Attribute::PermanentIdReq,
        AttributeType::AtMac => Attribute::Mac([0xE5; 16]),
        AttributeType::AtNotification => Attribute::Notification(0x4000 | 1026),
        AttributeType::AtAnyIdReq => Attribute::AnyIdReq,
        AttributeType::AtIdentity => Attribute::Identity(b"1244070100000001@eapsim.foo".to_vec()),
        AttributeType::AtVersionList => Attribute::VersionList(vec![1, 2]),
        AttributeType::AtSelectedVersion => Attribute::SelectedVersion(1),
        AttributeType::AtFullauthIdReq => Attribute::FullauthIdReq,
        AttributeType::AtCounter => Attribute::Counter(7),
        AttributeType::AtCounterTooSmall => Attribute::CounterTooSmall,
        AttributeType::AtNonceS => Attribute::NonceS([0xF6; 16]),
        AttributeType::AtClientErrorCode => Attribute::ClientErrorCode(0),
        AttributeType::AtKdfInput => Attribute::KdfInput(b"WLAN".to_vec()),
        AttributeType::AtKdf => Attribute::Kdf(1),
        AttributeType::AtIv => Attribute::Iv([0x17; 16]),
        AttributeType::AtEncrData => Attribute::EncrData(vec![0x28; 32]),
        AttributeType::AtNextPseudonym => Attribute::NextPseudonym(b"w8w49PexCazWJ".to_vec()),
        AttributeType::AtNextReauthId => Attribute::NextReauthId(b"Y24fNSrz8BP274jOJaF17WfxI8YO7QX0@foo.bar".to_vec()),
        AttributeType::AtCheckcode => Attribute::Checkcode(vec![0x39; 20]),
        AttributeType::AtResultInd => Attribute::ResultInd,
        AttributeType::AtBidding => Attribute::Bidding {
            supports_aka_prime: true,
        },
    }
}

fn legal_subtype(method: EapMethod) -> u8 {
    match method {
        EapMethod::Sim => subtype::SIM_CHALLENGE,
        EapMethod::Aka | EapMethod::AkaPrime => subtype::AKA_CHALLENGE,
    }
}

#[test]
fn test_every_supported_kind_round_trips() {
    init_test_logging();

    for method in EapMethod::ALL {
        let attributes: Vec<Attribute> = ALL_TYPES
            .into_iter()
            .filter(|t| method.supports_attribute(*t))
            .map(|t| sample(t, method))
            .collect();
        let expected_types: Vec<u8> = attributes.iter().map(Attribute::attribute_type).collect();

        let type_data = TypeData::new(method, legal_subtype(method), attributes)
            .unwrap_or_else(|e| panic!("{method}: {e}"));
        let bytes = type_data.encode_to_vec();
        assert_eq!(bytes.len(), type_data.encoded_len());
        assert_eq!(bytes.len() % 4, 3, "{method}: attributes must be 4-byte aligned");

        let decoded = decode_ok(method, &bytes);
        assert_eq!(decoded, type_data, "{method}");
        assert_eq!(decoded.attributes().type_codes(), expected_types);
        assert_eq!(decoded.encode_to_vec(), bytes);
    }
}

#[test]
fn test_each_kind_alone_round_trips() {
    for method in EapMethod::ALL {
        for attribute_type in ALL_TYPES.into_iter().filter(|t| method.supports_attribute(*t)) {
            let attribute = sample(attribute_type, method);
            let type_data =
                TypeData::new(method, subtype::NOTIFICATION, vec![attribute.clone()]).unwrap();
            let decoded = decode_ok(method, &type_data.encode_to_vec());
            assert_eq!(decoded.get(attribute_type), Some(&attribute), "{method} {attribute_type}");
        }
    }
}

#[test]
fn test_every_subtype_round_trips() {
    for method in EapMethod::ALL {
        for (code, name) in method.descriptor().subtypes {
            let type_data = TypeData::with_reserved(method, *code, [0x12, 0x34], vec![]).unwrap();
            let decoded = decode_ok(method, &type_data.encode_to_vec());
            assert_eq!(decoded.subtype(), *code);
            assert_eq!(decoded.subtype_name(), *name);
            assert_eq!(decoded.reserved(), [0x12, 0x34]);
        }
    }
}

#[test]
fn test_hand_built_fixtures_reencode_identically() {
    init_test_logging();

    let cases = [
        (EapMethod::Sim, sim_start_request().to_bytes()),
        (EapMethod::Sim, sim_challenge_request(&RANDS[..2]).to_bytes()),
        (EapMethod::Sim, sim_challenge_request(&RANDS).to_bytes()),
        (EapMethod::Aka, aka_challenge_request().to_bytes()),
        (EapMethod::AkaPrime, aka_challenge_request().to_bytes()),
        (EapMethod::AkaPrime, aka_prime_challenge_request().to_bytes()),
    ];

    for (method, bytes) in cases {
        let decoded = decode_ok(method, &bytes);
        assert_eq!(decoded.encode_to_vec(), bytes, "{method}");
    }
}

#[test]
fn test_wire_order_preserved() {
    let bytes = aka_prime_challenge_request().to_bytes();
    let decoded = decode_ok(EapMethod::AkaPrime, &bytes);
    assert_eq!(decoded.attributes().type_codes(), vec![1, 2, 23, 24, 11]);

    // Same attributes supplied in another order keep that order
    let reordered: Vec<Attribute> = decoded.attributes().iter().rev().cloned().collect();
    let rebuilt = TypeData::new(EapMethod::AkaPrime, subtype::AKA_CHALLENGE, reordered).unwrap();
    assert_eq!(rebuilt.attributes().type_codes(), vec![11, 24, 23, 2, 1]);
    let redecoded = decode_ok(EapMethod::AkaPrime, &rebuilt.encode_to_vec());
    assert_eq!(redecoded.attributes().type_codes(), vec![11, 24, 23, 2, 1]);
}

#[test]
fn test_sim_start_contents() {
    let decoded = decode_ok(EapMethod::Sim, &sim_start_request().to_bytes());
    assert_eq!(decoded.subtype_name(), "Start");
    assert_eq!(
        decoded.get(AttributeType::AtVersionList),
        Some(&Attribute::VersionList(vec![1]))
    );
    assert!(decoded.attributes().contains(AttributeType::AtAnyIdReq));
}
