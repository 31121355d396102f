//! Malformed input integration tests
//!
//! Hostile or broken type data must come back as a client error code and
//! never panic.

use integration_tests::test_fixtures::{
    aka_challenge_request, aka_prime_challenge_request, sim_challenge_request, RawAttribute,
    RawTypeData, RANDS,
};
use integration_tests::{assert_client_error, init_test_logging};
use simaka_eap::method::subtype;
use simaka_eap::{ClientErrorCode, EapMethod, TypeData};

const UNABLE: ClientErrorCode = ClientErrorCode::UnableToProcess;

#[test]
fn test_null_input() {
    init_test_logging();
    for method in EapMethod::ALL {
        assert_eq!(TypeData::decode_optional(method, None), Err(UNABLE));
    }
}

#[test]
fn test_empty_and_short_input() {
    for method in EapMethod::ALL {
        assert_client_error(method, &[], UNABLE);
        assert_client_error(method, &[subtype::NOTIFICATION], UNABLE);
        assert_client_error(method, &[subtype::NOTIFICATION, 0], UNABLE);
    }
}

#[test]
fn test_every_truncation_fails_cleanly() {
    init_test_logging();

    let fixture = aka_prime_challenge_request();
    let bytes = fixture.to_bytes();

    // Prefixes that end exactly on an attribute boundary are valid messages
    let mut boundaries = vec![3];
    for attribute in &fixture.attributes {
        let last = *boundaries.last().unwrap();
        boundaries.push(last + attribute.to_bytes().len());
    }

    for cut in 0..bytes.len() {
        let result = TypeData::decode(EapMethod::AkaPrime, &bytes[..cut]);
        if boundaries.contains(&cut) {
            assert!(result.is_ok(), "prefix of {cut} bytes should decode");
        } else {
            assert_eq!(result, Err(UNABLE), "prefix of {cut} bytes");
        }
    }
}

#[test]
fn test_duplicate_attribute_types() {
    let bytes = aka_challenge_request()
        .with(RawAttribute::reserved_16(11, &[0x77; 16]))
        .to_bytes();
    assert_client_error(EapMethod::Aka, &bytes, UNABLE);

    let bytes = RawTypeData::new(subtype::CLIENT_ERROR)
        .with(RawAttribute::u16_value(22, 0))
        .with(RawAttribute::u16_value(22, 0))
        .to_bytes();
    for method in EapMethod::ALL {
        assert_client_error(method, &bytes, UNABLE);
    }
}

#[test]
fn test_duplicate_skippable_attribute_types() {
    let bytes = RawTypeData::new(subtype::NOTIFICATION)
        .with(RawAttribute::new(200, &[1, 2]))
        .with(RawAttribute::new(200, &[3, 4]))
        .to_bytes();
    assert_client_error(EapMethod::Sim, &bytes, UNABLE);
}

#[test]
fn test_subtype_not_in_method_table() {
    assert_client_error(EapMethod::Sim, &[subtype::AKA_CHALLENGE, 0, 0], UNABLE);
    assert_client_error(EapMethod::Aka, &[subtype::SIM_START, 0, 0], UNABLE);
    assert_client_error(EapMethod::AkaPrime, &[subtype::SIM_CHALLENGE, 0, 0], UNABLE);
    assert_client_error(EapMethod::Aka, &[3, 0, 0], UNABLE);
    assert_client_error(EapMethod::Sim, &[0xFF, 0, 0], UNABLE);
}

#[test]
fn test_zero_length_attribute() {
    let bytes = RawTypeData::new(subtype::NOTIFICATION)
        .with(RawAttribute::verbatim(12, 0, &[]))
        .to_bytes();
    assert_client_error(EapMethod::Aka, &bytes, UNABLE);

    // A zero length must not be read as "skip nothing" for skippable types
    let bytes = RawTypeData::new(subtype::NOTIFICATION)
        .with(RawAttribute::verbatim(200, 0, &[0, 0]))
        .to_bytes();
    assert_client_error(EapMethod::Aka, &bytes, UNABLE);
}

#[test]
fn test_length_past_end_of_buffer() {
    let bytes = RawTypeData::new(subtype::NOTIFICATION)
        .with(RawAttribute::verbatim(12, 3, &[0x40, 0x00]))
        .to_bytes();
    assert_client_error(EapMethod::Sim, &bytes, UNABLE);
}

#[test]
fn test_fixed_length_mismatch() {
    // AT_MAC announced as 8 bytes instead of 20
    let bytes = RawTypeData::new(subtype::AKA_CHALLENGE)
        .with(RawAttribute::new(11, &[0, 0, 1, 2, 3, 4]))
        .to_bytes();
    assert_client_error(EapMethod::Aka, &bytes, UNABLE);
}

#[test]
fn test_unknown_non_skippable_attribute() {
    let bytes = RawTypeData::new(subtype::NOTIFICATION)
        .with(RawAttribute::new(5, &[0, 0]))
        .to_bytes();
    for method in EapMethod::ALL {
        assert_client_error(method, &bytes, UNABLE);
    }
}

#[test]
fn test_attribute_from_another_method() {
    // AT_VERSION_LIST is EAP-SIM only
    let bytes = RawTypeData::new(subtype::NOTIFICATION)
        .with(RawAttribute::length_prefixed(15, &[0, 1]))
        .to_bytes();
    assert!(TypeData::decode(EapMethod::Sim, &bytes).is_ok());
    assert_client_error(EapMethod::Aka, &bytes, UNABLE);

    // AT_KDF is EAP-AKA' only
    let bytes = RawTypeData::new(subtype::AKA_CHALLENGE)
        .with(RawAttribute::u16_value(24, 1))
        .to_bytes();
    assert!(TypeData::decode(EapMethod::AkaPrime, &bytes).is_ok());
    assert_client_error(EapMethod::Aka, &bytes, UNABLE);

    // AT_AUTN is not part of EAP-SIM
    let bytes = RawTypeData::new(subtype::SIM_CHALLENGE)
        .with(RawAttribute::reserved_16(2, &[0x11; 16]))
        .to_bytes();
    assert_client_error(EapMethod::Sim, &bytes, UNABLE);
}

#[test]
fn test_sim_rand_count() {
    init_test_logging();

    assert_client_error(
        EapMethod::Sim,
        &sim_challenge_request(&RANDS[..1]).to_bytes(),
        ClientErrorCode::InsufficientChallenges,
    );
    assert_client_error(
        EapMethod::Sim,
        &sim_challenge_request(&[RANDS[0], RANDS[1], RANDS[2], [0x04; 16]]).to_bytes(),
        ClientErrorCode::InsufficientChallenges,
    );
    assert_client_error(
        EapMethod::Sim,
        &sim_challenge_request(&[]).to_bytes(),
        ClientErrorCode::InsufficientChallenges,
    );
}

#[test]
fn test_sim_rands_not_fresh() {
    assert_client_error(
        EapMethod::Sim,
        &sim_challenge_request(&[RANDS[0], RANDS[1], RANDS[0]]).to_bytes(),
        ClientErrorCode::RandNotFresh,
    );
}

#[test]
fn test_aka_rand_errors_are_generic() {
    let bytes = RawTypeData::new(subtype::AKA_CHALLENGE)
        .with(RawAttribute::rand(&RANDS[..2]))
        .to_bytes();
    assert_client_error(EapMethod::Aka, &bytes, UNABLE);
    assert_client_error(EapMethod::AkaPrime, &bytes, UNABLE);
}

#[test]
fn test_rand_not_multiple_of_16() {
    let mut value = vec![0, 0];
    value.extend_from_slice(&[0x01; 20]);
    let bytes = RawTypeData::new(subtype::SIM_CHALLENGE)
        .with(RawAttribute::new(1, &value))
        .to_bytes();
    assert_client_error(EapMethod::Sim, &bytes, ClientErrorCode::InsufficientChallenges);

    let bytes = RawTypeData::new(subtype::AKA_CHALLENGE)
        .with(RawAttribute::new(1, &value))
        .to_bytes();
    assert_client_error(EapMethod::Aka, &bytes, UNABLE);
}

#[test]
fn test_padding_must_be_zero() {
    let bytes = RawTypeData::new(subtype::REAUTHENTICATION)
        .with(RawAttribute::verbatim(6, 2, &[0, 0, 0, 1, 0, 0]))
        .to_bytes();
    assert_client_error(EapMethod::Aka, &bytes, UNABLE);

    let bytes = RawTypeData::new(subtype::REAUTHENTICATION)
        .with(RawAttribute::verbatim(6, 2, &[0; 6]))
        .to_bytes();
    assert!(TypeData::decode(EapMethod::Aka, &bytes).is_ok());
}

#[test]
fn test_padding_longer_than_12_bytes() {
    let bytes = RawTypeData::new(subtype::REAUTHENTICATION)
        .with(RawAttribute::verbatim(6, 4, &[0; 14]))
        .to_bytes();
    assert_client_error(EapMethod::Sim, &bytes, UNABLE);
}

#[test]
fn test_res_length_in_bits() {
    // 36 bits is not a whole number of bytes
    let bytes = RawTypeData::new(subtype::AKA_CHALLENGE)
        .with(RawAttribute::new(3, &[0x00, 36, 1, 2, 3, 4, 5]))
        .to_bytes();
    assert_client_error(EapMethod::Aka, &bytes, UNABLE);

    // RES shorter than 4 bytes
    let bytes = RawTypeData::new(subtype::AKA_CHALLENGE)
        .with(RawAttribute::new(3, &[0x00, 16, 1, 2]))
        .to_bytes();
    assert_client_error(EapMethod::Aka, &bytes, UNABLE);
}

#[test]
fn test_identity_actual_length_too_long() {
    let bytes = RawTypeData::new(subtype::AKA_IDENTITY)
        .with(RawAttribute::verbatim(14, 2, &[0x00, 0x09, b'a', b'b', b'c', b'd']))
        .to_bytes();
    assert_client_error(EapMethod::Aka, &bytes, UNABLE);
}

#[test]
fn test_single_byte_corruption_never_panics() {
    let originals = [
        (EapMethod::Sim, sim_challenge_request(&RANDS).to_bytes()),
        (EapMethod::Aka, aka_challenge_request().to_bytes()),
        (EapMethod::AkaPrime, aka_prime_challenge_request().to_bytes()),
    ];

    for (method, original) in originals {
        for position in 0..original.len() {
            for replacement in [0x00, 0x01, 0x7F, 0x80, 0xFF] {
                let mut corrupted = original.clone();
                corrupted[position] = replacement;
                if let Ok(decoded) = TypeData::decode(method, &corrupted) {
                    // reserved bits are normalised on encode, values are not
                    let reencoded = decoded.encode_to_vec();
                    assert_eq!(reencoded.len(), corrupted.len());
                    assert_eq!(TypeData::decode(method, &reencoded), Ok(decoded));
                }
            }
        }
    }
}
