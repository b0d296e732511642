//! # Embedded Decade Dataset
//!
//! The pre-supplied yearly enrollment tables, 2013 through 2022, one
//! `schools x grades` table per year with rows in registry order and
//! columns in grade order. This module is the external data-loading
//! collaborator; it carries no semantics beyond handing the builder its
//! input.
//!
//! A few cells are unreported (`M`): Louise Dean School's grade-12
//! counts in the first two years, and scattered gaps at the National
//! Sport School and Jack James High School.

use enrol_tensor::{Enrollment, YearTable};

/// An unreported cell.
const M: Enrollment = None;

/// A reported enrollment count.
fn e(count: u32) -> Enrollment {
    Some(count)
}

/// The ten yearly tables in chronological order, ready for
/// `EnrollmentTensor::build`.
pub fn decade_tables() -> Vec<YearTable> {
    vec![
        year_2013(),
        year_2014(),
        year_2015(),
        year_2016(),
        year_2017(),
        year_2018(),
        year_2019(),
        year_2020(),
        year_2021(),
        year_2022(),
    ]
}

fn year_2013() -> YearTable {
    YearTable::new(vec![
        vec![e(549), e(539), e(526)],
        vec![e(430), e(387), e(379)],
        vec![e(70), e(104), M],
        vec![e(253), e(247), e(228)],
        vec![e(386), e(336), e(348)],
        vec![e(597), e(577), e(560)],
        vec![e(689), e(681), e(675)],
        vec![e(432), e(426), e(419)],
        vec![e(413), e(393), e(357)],
        vec![e(638), e(599), e(589)],
        vec![e(493), e(504), e(465)],
        vec![M, e(72), e(60)],
        vec![e(519), e(506), e(479)],
        vec![e(337), e(315), e(286)],
        vec![e(497), e(476), e(431)],
        vec![e(143), e(135), e(138)],
        vec![e(623), e(615), e(598)],
        vec![e(621), e(576), e(561)],
        vec![e(416), e(401), e(387)],
        vec![e(382), e(349), e(339)],
    ])
}

fn year_2014() -> YearTable {
    YearTable::new(vec![
        vec![e(548), e(530), e(532)],
        vec![e(419), e(398), e(384)],
        vec![e(90), e(95), M],
        vec![e(261), e(235), e(237)],
        vec![e(364), e(351), e(317)],
        vec![e(605), e(589), e(550)],
        vec![e(714), e(672), e(670)],
        vec![e(451), e(444), e(398)],
        vec![e(393), e(366), e(357)],
        vec![e(651), e(637), e(583)],
        vec![e(486), e(495), e(486)],
        vec![e(55), e(49), e(66)],
        vec![e(535), e(506), e(488)],
        vec![e(322), e(302), e(314)],
        vec![e(475), e(468), e(431)],
        vec![e(182), e(179), e(168)],
        vec![e(646), e(633), e(630)],
        vec![e(608), e(592), e(562)],
        vec![e(437), e(394), e(414)],
        vec![e(385), e(349), e(332)],
    ])
}

fn year_2015() -> YearTable {
    YearTable::new(vec![
        vec![e(555), e(546), e(523)],
        vec![e(427), e(393), e(408)],
        vec![e(80), e(99), e(89)],
        vec![e(262), e(255), e(252)],
        vec![e(369), e(332), e(319)],
        vec![e(624), e(597), e(580)],
        vec![e(723), e(681), e(689)],
        vec![e(452), e(440), e(412)],
        vec![e(387), e(371), e(357)],
        vec![e(643), e(636), e(611)],
        vec![e(508), e(482), e(455)],
        vec![e(62), e(43), e(52)],
        vec![e(522), e(498), e(515)],
        vec![e(357), e(321), e(315)],
        vec![e(477), e(457), e(440)],
        vec![e(179), e(158), e(181)],
        vec![e(672), e(630), e(634)],
        vec![e(603), e(602), e(552)],
        vec![e(442), e(396), e(404)],
        vec![e(395), e(340), e(355)],
    ])
}

fn year_2016() -> YearTable {
    YearTable::new(vec![
        vec![e(555), e(536), e(528)],
        vec![e(424), e(427), e(415)],
        vec![e(95), e(119), e(96)],
        vec![e(256), e(261), e(231)],
        vec![e(378), e(332), e(322)],
        vec![e(637), e(618), e(592)],
        vec![e(715), e(717), e(681)],
        vec![e(452), e(441), e(425)],
        vec![e(394), e(384), e(352)],
        vec![e(646), e(650), e(619)],
        vec![e(482), e(481), e(472)],
        vec![e(63), e(60), e(66)],
        vec![e(535), e(516), e(504)],
        vec![e(363), e(329), e(320)],
        vec![e(503), e(479), e(455)],
        vec![e(213), e(167), e(176)],
        vec![e(690), e(670), e(638)],
        vec![e(598), e(573), e(580)],
        vec![e(423), e(414), e(396)],
        vec![e(387), e(370), e(353)],
    ])
}

fn year_2017() -> YearTable {
    YearTable::new(vec![
        vec![e(564), e(527), e(520)],
        vec![e(438), e(421), e(399)],
        vec![e(89), e(129), e(107)],
        vec![e(254), e(241), e(237)],
        vec![e(383), e(357), e(313)],
        vec![e(658), e(639), e(616)],
        vec![e(718), e(702), e(678)],
        vec![e(469), e(421), e(413)],
        vec![e(390), e(365), e(356)],
        vec![e(667), e(651), e(630)],
        vec![e(469), e(483), e(465)],
        vec![e(77), e(74), e(44)],
        vec![e(538), e(514), e(508)],
        vec![e(372), e(361), e(319)],
        vec![e(505), e(497), e(447)],
        vec![e(214), e(183), e(171)],
        vec![e(700), e(658), e(638)],
        vec![e(620), e(596), e(581)],
        vec![e(424), e(414), e(400)],
        vec![e(384), e(364), e(360)],
    ])
}

fn year_2018() -> YearTable {
    YearTable::new(vec![
        vec![e(562), e(535), e(519)],
        vec![e(439), e(440), e(415)],
        vec![e(105), e(128), e(126)],
        vec![e(277), e(255), e(259)],
        vec![e(354), e(337), e(322)],
        vec![e(652), e(638), e(622)],
        vec![e(747), e(727), e(694)],
        vec![e(465), e(435), e(416)],
        vec![e(405), e(390), e(351)],
        vec![e(681), e(671), e(650)],
        vec![e(485), e(454), e(459)],
        vec![e(59), e(67), e(59)],
        vec![e(555), e(547), e(542)],
        vec![e(377), e(361), e(350)],
        vec![e(511), e(503), e(487)],
        vec![e(233), e(192), e(190)],
        vec![e(684), e(689), e(655)],
        vec![e(599), e(594), e(556)],
        vec![e(409), e(414), e(405)],
        vec![e(384), e(375), e(352)],
    ])
}

fn year_2019() -> YearTable {
    YearTable::new(vec![
        vec![e(569), e(527), e(523)],
        vec![e(438), e(440), e(409)],
        vec![e(120), e(154), e(143)],
        vec![e(263), e(277), e(253)],
        vec![e(349), e(341), e(322)],
        vec![e(667), e(663), e(644)],
        vec![e(734), e(729), e(719)],
        vec![e(457), e(439), e(422)],
        vec![e(380), e(362), e(366)],
        vec![e(677), e(663), e(656)],
        vec![e(477), e(453), e(447)],
        vec![e(74), e(78), e(51)],
        vec![e(561), e(545), e(523)],
        vec![e(366), e(359), e(363)],
        vec![e(509), e(487), e(472)],
        vec![e(212), e(225), e(215)],
        vec![e(717), e(695), e(659)],
        vec![e(614), e(577), e(576)],
        vec![e(417), e(397), e(403)],
        vec![e(409), e(386), e(365)],
    ])
}

fn year_2020() -> YearTable {
    YearTable::new(vec![
        vec![e(563), e(558), e(523)],
        vec![e(458), e(441), e(433)],
        vec![e(125), e(134), e(131)],
        vec![e(277), e(279), e(275)],
        vec![e(353), e(326), e(312)],
        vec![e(681), e(646), e(632)],
        vec![e(737), e(744), e(704)],
        vec![e(461), e(446), e(419)],
        vec![e(393), e(382), e(370)],
        vec![e(688), e(682), e(662)],
        vec![e(462), e(461), e(449)],
        vec![e(77), e(80), M],
        vec![e(563), e(550), e(535)],
        vec![e(398), e(360), e(360)],
        vec![e(511), e(518), e(487)],
        vec![e(230), e(222), e(211)],
        vec![e(715), e(702), e(671)],
        vec![e(599), e(591), e(559)],
        vec![e(423), e(400), e(397)],
        vec![e(384), e(380), e(361)],
    ])
}

fn year_2021() -> YearTable {
    YearTable::new(vec![
        vec![e(543), e(555), e(520)],
        vec![e(439), e(427), e(422)],
        vec![e(131), e(158), e(139)],
        vec![e(280), e(261), e(246)],
        vec![e(343), e(348), e(325)],
        vec![e(701), e(674), e(657)],
        vec![e(741), e(745), e(705)],
        vec![e(450), e(419), e(428)],
        vec![e(393), e(380), e(348)],
        vec![e(716), e(680), e(654)],
        vec![e(472), e(440), e(451)],
        vec![e(89), e(71), M],
        vec![e(596), e(556), e(544)],
        vec![e(399), e(385), e(382)],
        vec![e(529), e(489), e(492)],
        vec![e(250), e(232), e(240)],
        vec![e(733), e(709), e(711)],
        vec![e(586), e(575), e(566)],
        vec![e(432), e(393), e(377)],
        vec![e(396), e(364), e(361)],
    ])
}

fn year_2022() -> YearTable {
    YearTable::new(vec![
        vec![e(555), e(527), e(515)],
        vec![e(449), e(455), e(434)],
        vec![e(153), e(180), e(154)],
        vec![e(269), e(264), e(273)],
        vec![e(365), e(326), e(304)],
        vec![e(692), e(682), e(671)],
        vec![e(751), e(733), e(719)],
        vec![e(465), e(451), e(405)],
        vec![e(381), e(359), e(361)],
        vec![e(721), e(716), e(687)],
        vec![e(475), e(445), e(425)],
        vec![e(62), e(62), e(68)],
        vec![e(579), e(574), e(561)],
        vec![e(424), e(403), e(364)],
        vec![e(540), e(531), e(476)],
        vec![e(257), M, e(255)],
        vec![e(759), e(738), e(709)],
        vec![e(604), e(565), e(551)],
        vec![e(408), e(401), e(395)],
        vec![e(410), e(385), e(368)],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use enrol_core::YEAR_COUNT;
    use enrol_tensor::EnrollmentTensor;

    #[test]
    fn dataset_has_one_table_per_year() {
        assert_eq!(decade_tables().len(), YEAR_COUNT);
    }

    #[test]
    fn dataset_builds_into_a_valid_tensor() {
        let tensor = EnrollmentTensor::build(decade_tables()).unwrap();
        assert_eq!(tensor.shape(), (10, 20, 3));
    }

    #[test]
    fn dataset_carries_unreported_cells() {
        let tensor = EnrollmentTensor::build(decade_tables()).unwrap();
        // Louise Dean School (row 2) did not report grade 12 in 2013.
        assert_eq!(tensor.cell(0, 2, 2), None);
        // Jack James High School (row 15) did not report grade 11 in 2022.
        assert_eq!(tensor.cell(9, 15, 1), None);
    }
}
