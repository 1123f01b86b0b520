use cube_core::{CubieCube, FaceCube, MoveSequence, SymmetryTable};

static SCRAMBLES: [[&str; 2]; 16] = [
    ["", "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB"],
    ["U", "UUUUUUUUUBBBRRRRRRRRRFFFFFFDDDDDDDDDFFFLLLLLLLLLBBBBBB"],
    [
        "U2 R2 L D2 L F2 B2 U' D' F U R' L2 U2 D L F' B2 D R2",
        "FLLLULFRFRUURRRBBBLDDFFUBRUDFRDDUFLDUFUFLDLBRBDRBBULBD",
    ],
    [
        "L U' R2 F B2 R2 L U' D2 R2 F B' U R' U2 R2 D2 F2 U2 L'",
        "BLBLUFFFFDULURFRRULDLBFRDBUFDFBDDDBRDUUFLULRRUDRLBRBLB",
    ],
    [
        "R L2 U2 D2 R2 U2 R' D2 R' F' R L2 B R2 L' F' B2 U' D' F B2 U R' L2",
        "DUULUFBDDRRFURDBFLRBBUFBLBLULURDLLBDFUUFLRBDFRFRLBDFRD",
    ],
    [
        "L2 U2 D' L2 U2 L2 F2 U2 D' F2 B2 L2 U B U2 D R2 U' F2 D R2 L'",
        "BULRUDFDDFLDRRRBFBLFRUFFFBLULUFDLLDRRDURLLBURFBUBBUDBD",
    ],
    [
        "U2 L D2 R2 U2 L F2 B2 D' R' L' F' B2 R' L2 F2 B' R U2 D F B2 R L'",
        "BRRRUBLRBDDFBRRUDRBDRLFLDLFLURDDFUFBLBUBLFLLFDUDFBUUUF",
    ],
    [
        "F U2 D2 R2 F' B2 D2 F B D2 L2 U2 D R F2 B' L' B R L U D2 R2 L'",
        "RFDUUDBFRFBFRRDBBUDRUDFBBDLLLULDUDLLUFRRLRRUDLLBFBUFBF",
    ],
    [
        "U D F' B' L' B R L2 F B R2 L' U F2 B R2 F2 B2 U' F2 B2 U D R2 D'",
        "BDUFULLBFRBRURBFUBFRDUFRUFRFRULDBDLRUDDFLFLULBRLDBLDDB",
    ],
    [
        "R2 D' B2 U' D' R2 U' L2 U' L2 B' R' F D F' B U2 L'",
        "BUDFUDRFDBRFURBFDRDULRFBUBURDLFDLRDDULFULBBRFLRLLBLBFU",
    ],
    [
        "L D2 R' L' D2 F' R' L' F B2 U' D F B' R' U2 L",
        "FRFDUDULRUBDFRBFFRLDBLFRDULRRDLDUBLULFBBLFDBBRDURBUFUL",
    ],
    [
        "F U' F' B' L' U F B R F' B D2 F B2 U2 R2 U2 D2 F B",
        "RRDBUFDLBLLFLRRURBRUDLFDLRRUUBUDBRBLDDBDLBUFFLDFFBFUUF",
    ],
    [
        "F B R L' F L U' D' B' U D F B2 D B2 D2 F2 R B2 D2",
        "URFUUDRLLDRRBRFDFLDBBDFRLDBUBRUDLBDDBLFBLLLFFUURRBUFFU",
    ],
    [
        "F2 B2 R' U2 R' F2 D2 R F2 B' R2 D' F U F2 B' R L2 U' D'",
        "LRDDUDBUUFFRDRBBUUDFLRFRLBDBLLFDLULFFBRULURLUFFDRBBRDB",
    ],
    [
        "R2 U2 L' B2 R2 L' B2 U2 D2 L' F' B2 U' F' B' U2 D' F' R' U' L",
        "FLUBULFRDBUBFRUBFFUDLDFDDLURBRFDRRBLLURFLBFLBLDURBUDRD",
    ],
    [
        "U2 D2 L2 F' B L2 B2 U2 F' R L2 F' B2 U2 D F' U' D2 R U2 D F2",
        "LBDLULDDURDRRRFRURBFFRFBFRDLDBDDBDFBBULRLFFBUFLUUBUULL",
    ],
];

#[test_log::test]
fn scrambles_produce_known_facelets() {
    for [seq, facelets] in SCRAMBLES {
        let moves = seq.parse::<MoveSequence>().unwrap();
        let cube = CubieCube::SOLVED.apply_moves(&moves);
        assert_eq!(cube.to_facelet_cube().to_string(), facelets, "{seq}");
    }
}

#[test_log::test]
fn known_facelets_decode_to_scrambles() {
    for [seq, facelets] in SCRAMBLES {
        let moves = seq.parse::<MoveSequence>().unwrap();
        let face_cube = facelets.parse::<FaceCube>().unwrap();
        let cube = face_cube.to_cubie_cube().unwrap();

        assert_eq!(cube, moves.cubie_cube(), "{seq}");
        assert_eq!(cube.verify(), Ok(()), "{seq}");
        assert_eq!(cube.to_facelet_cube(), face_cube, "{seq}");
        assert!((cube * moves.inverse().cubie_cube()).is_solved(), "{seq}");
    }
}

#[test_log::test]
fn inverse_state_is_the_inverse_scramble() {
    for [seq, facelets] in SCRAMBLES {
        let moves = seq.parse::<MoveSequence>().unwrap();
        let cube = facelets.parse::<FaceCube>().unwrap().to_cubie_cube().unwrap();
        assert_eq!(
            cube.invert().to_facelet_cube(),
            moves.inverse().cubie_cube().to_facelet_cube(),
            "{seq}"
        );
    }
}

#[test_log::test]
fn parities_agree_after_face_turns() {
    for [seq, _] in SCRAMBLES {
        let moves = seq.parse::<MoveSequence>().unwrap();
        let cube = moves.cubie_cube();
        let quarter_turns = moves
            .iter()
            .filter(|m| m.dir.quarter_turns() != 2)
            .count();
        let expected = u8::from(quarter_turns % 2 == 1);
        assert_eq!(cube.corner_parity(), expected, "{seq}");
        assert_eq!(cube.edge_parity(), expected, "{seq}");
    }
}

#[test_log::test]
fn scrambles_contain_the_identity_symmetry() {
    let table = SymmetryTable::get();
    for [seq, _] in SCRAMBLES {
        let symmetries = seq.parse::<MoveSequence>().unwrap().cubie_cube().symmetries(table);
        assert!(symmetries.contains(&0), "{seq}");
    }
}

#[test_log::test]
fn superflip_has_every_symmetry() {
    let superflip = "UBULURUFURURFRBRDRFUFLFRFDFDFDLDRDBDLULBLFLDLBUBRBLBDB"
        .parse::<FaceCube>()
        .unwrap()
        .to_cubie_cube()
        .unwrap();
    assert_eq!(superflip.invert(), superflip);
    assert_eq!(
        superflip.symmetries(SymmetryTable::get()),
        (0..96).collect::<Vec<_>>()
    );
}
