/// Curated day-to-day English vocabulary the word bank is built from.
///
/// Words are whitespace separated. Entries outside the playable length
/// range and repeated entries are expected here; the bank filters them.
pub const RAW_CORPUS: &str = "
    time year people thing woman life child world school state family student group country problem
    hand part place case week company system program question work number night point home water
    room mother area money story fact month right study book business issue side kind head house
    service friend father power hour game line member city community name team minute idea body
    information back parent face level office door health person history party result change
    morning reason research girl food moment teacher force education foot policy process study
    offer music river plant garden police crime court human market death price class nature
    photo paper space voice earth table drive break lunch ready visit share happy angry clean
    early learn start round shoes dress phone watch beach field light sound dream focus skill
    value event model matter radio color movie horse birds sugar bread fruit juice chair train
    plane travel guide hotel spend enjoy relax smile laugh cry shout quiet loud quick slow
    dirty sweet fresh spicy salty heavy light thick thin soft hard rough smooth sharp dull
    north south east west wind rain storm snow cloud heat cold cool warm dry wet bank card
    cash coin sale shop store buy sell rent pay cost save rich poor busy free safe risk
    lock keys open shut push pull walk run jump swim fly ride drive stop wait stay live
    love hate like hope wish want need feel think know guess mind care help look hear
    talk speak tell say ask answer reply write read sign draw paint cook bake boil fry
    wash wipe dust sweep iron fold wear size fit tight loose short long tall high low
    deep wide narrow near far here there where when what which who why how much many
    full empty half whole part some none all both each every other another same real
    true false wrong right good bad best worse fine nice okay sure maybe perhaps yes
";
