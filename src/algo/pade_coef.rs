//! Coefficients of the order-36 Yoshida–Padé approximant of K_ν.
//!
//! Row `i` holds the coefficients e₀, …, eᵢ of a polynomial in ν², lowest
//! power first. Evaluated at ν² it gives the i-th numerator coefficient;
//! its last entry times ∏ₗ₍ₗ₌₀…ᵢ₋₁₎ ((36 − l + ½)² − ν²) gives the i-th
//! denominator coefficient. Each entry is the unevaluated sum hi + lo.
//!
//! The table is normalized so that the constant coefficient is 1.

#![allow(clippy::excessive_precision)]

/// Degree of the approximant.
pub(crate) const PADE_ORDER: usize = 36;

#[rustfmt::skip]
pub(crate) static ESS: [&[[f64; 2]]; PADE_ORDER + 1] =
[
    &[
        [1.0, 0.0],
    ],
    &[
        [332.9375, 0.0],
        [0.25, 0.0],
    ],
    &[
        [51687.20703125, 0.0],
        [86.37544014084507, -1.4010701831889299e-15],
        [0.030809859154929578, -5.863854003301883e-19],
    ],
    &[
        [4977808.938964844, 0.0],
        [13886.840549809272, -1.8787683980285843e-13],
        [11.0221904342723, 4.169851735681339e-16],
        [0.002494131455399061, -2.036060417813154e-21],
    ],
    &[
        [333779174.0955963, 0.0],
        [1382286.5619207702, 5.128072351551854e-11],
        [1830.9438829392798, -7.435244500103241e-14],
        [0.9220257003980404, -2.114386776842766e-17],
        [0.00014910568483363952, -2.478682247772535e-21],
    ],
    &[
        [16580123985.250168, 0.0],
        [95617514.18231636, -5.62101365303745e-10],
        [187912.81743135158, 5.833835784550418e-12],
        [157.913180543861, 3.2476980892304885e-15],
        [0.05685232317819963, 6.968638090880499e-19],
        [7.0167381098183305e-06, -2.760853664371641e-22],
    ],
    &[
        [633860327048.9248, -4.9591064453125e-05],
        [4890876810.75611, 3.107009576553303e-07],
        [13374964.908290762, 1.2219736355818327e-10],
        [16672.671394053217, -1.3540735646034193e-12],
        [10.019104352712574, -4.26118258304196e-16],
        [0.0027546304362424455, 1.8250914389639171e-19],
        [2.705458723934928e-07, 2.0433862667226088e-23],
    ],
    &[
        [19128142701645.176, 0.0009781122207641602],
        [192189939423.9151, 6.1345457745704256e-06],
        [702517175.3244717, 3.4296524431483354e-08],
        [1218116.3908052675, -1.0759756454429115e-10],
        [1085.925147625906, -8.922897716154056e-15],
        [0.49858633893235554, -9.373090235460323e-18],
        [0.00010917884630861816, 6.492447469001213e-21],
        [8.783956895892624e-09, 7.923483638792409e-25],
    ],
    &[
        [463718607030234.8, 0.0088155847042799],
        [5950751704505.597, 4.290923232986526e-05],
        [28289964705.285812, 9.690445458448377e-07],
        [65529519.39813553, 3.151012051463783e-09],
        [81253.12903365391, 3.8961672587682305e-13],
        [55.3636145944683, 2.87823395126694e-15],
        [0.020260448582195934, -5.840300085044279e-19],
        [3.6382980540539254e-06, -1.318314217799662e-22],
        [2.4493725959700586e-10, 1.8912865482967188e-26],
    ],
    &[
        [9144403719700838.0, -0.6913183471333468],
        [147753174895335.53, 0.003288116720579116],
        [895797640084.3608, 4.817476334417494e-05],
        [2696602556.708599, 1.2552272122480757e-07],
        [4465808.450348217, 1.2050347044864392e-10],
        [4233.289086766412, 3.6420568813382334e-14],
        [2.3004695784563802, 9.965878192538358e-17],
        [0.0006910648251562882, 3.72732531870426e-20],
        [1.0398112352409455e-07, 6.43758254710835e-24],
        [5.953336170760559e-12, 2.8017802116738225e-28],
    ],
    &[
        [1.4799254731152483e+17, 2.060649141451904],
        [2978723915407413.5, 0.10019284488044604],
        [22698305796632.918, -0.0016950561953922186],
        [87054696543.15987, 5.05505046960038e-06],
        [187291565.91329792, 1.227869733559648e-09],
        [237150.05858589802, -1.1006751381746379e-11],
        [179.38134213611093, -4.822056259883416e-15],
        [0.08008910265346642, -8.121446294512596e-19],
        [2.0183405386719215e-05, -5.945896292257497e-22],
        [2.586830875769941e-09, -1.271446145540326e-25],
        [1.2757148937344055e-13, 8.167547507907252e-30],
    ],
    &[
        [1.9779791662702574e+18, -118.89040871300597],
        [4.91919488356278e+16, 2.2050922075470245],
        [465964756989778.75, 0.021613605311154242],
        [2243504341225.2124, 0.00018197520435591098],
        [6146339615.731013, -4.7213890296122234e-07],
        [10110155.458658794, 8.966376527816802e-10],
        [10219.15784132933, -1.0125279777021538e-13],
        [6.355702770027018, -9.829799614715281e-17],
        [0.002383232000534408, -5.767501323392676e-20],
        [5.123469299972508e-07, -1.03062383608037e-23],
        [5.66652322684261e-11, 1.9778016272379063e-27],
        [2.4317146068251135e-15, -1.9594662402403712e-31],
    ],
    &[
        [2.1923969925323407e+19, 795.3893287764523],
        [6.695879601650479e+17, 2.869918378533724],
        [7817767268686192.0, -0.3578345050285684],
        [46723717336208.8, -0.002220312350634345],
        [160584541179.52902, -1.518642871975201e-05],
        [336317088.8996307, -2.790544871278235e-09],
        [441748.290195602, 1.4528073907303818e-11],
        [367.3871268851197, 2.4766234490160056e-14],
        [0.19209999500401898, -1.3593175851142025e-17],
        [6.153221467088055e-05, -6.4003201210705874e-21],
        [1.1434772161242169e-08, 6.62958046059686e-25],
        [1.1028225661388594e-12, -5.688315631688637e-29],
        [4.152518112747803e-17, -2.4031140822842606e-33],
    ],
    &[
        [2.020323362426225e+20, -7091.4451122427445],
        [7.542952172466773e+18, -247.3643206767509],
        [1.0784466247496365e+17, 7.017312849560147],
        [793136701844722.2, -0.009453312367654792],
        [3380841606963.694, 0.00012018924803691461],
        [8880444414.634129, 2.745481488122046e-07],
        [14854420.256948847, 1.4325951980333075e-11],
        [16063.3054807186, 4.965279241767361e-13],
        [11.242233329235033, -4.0851870173263616e-16],
        [0.00502790354299024, 1.5685189587142145e-19],
        [1.394421841196638e-06, 5.375478639622807e-23],
        [2.264156009069127e-10, 6.874240855184702e-27],
        [1.9205811523269864e-14, -1.4021102339646598e-30],
        [6.388489404227389e-19, -2.067465558263509e-35],
    ],
    &[
        [1.5495100885989862e+21, 59930.22643910861],
        [7.048877271598964e+19, 3606.2809960720615],
        [1.227976662822492e+18, -18.101898146395072],
        [1.1037926732363342e+16, 0.25026318778121853],
        [57838233822483.38, -0.00032926734803364065],
        [188352766256.8063, -9.154343025087516e-06],
        [395193896.0601016, 2.036615114869729e-08],
        [544520.1654277738, -3.574778225359329e-11],
        [495.958868698166, -2.278207493522806e-14],
        [0.29724979270745233, 2.7162177580013292e-17],
        [0.00011528077841752458, 6.750315154771564e-21],
        [2.7987784130866577e-08, -1.356597123995536e-24],
        [4.005987631240737e-12, 4.840850473386688e-29],
        [3.009993629529484e-16, -1.9298106822410265e-33],
        [8.894385974408593e-21, -6.230157006125528e-37],
    ],
    &[
        [9.889079839411845e+21, -777074.3924554979],
        [5.4692572821808946e+20, 20559.019749052095],
        [1.1565918835874728e+19, -381.0878768628879],
        [1.2639692296368734e+17, 6.4994177320386886],
        [808524254516356.4, -0.026925260290321593],
        [3235099160194.5615, -7.852171115912755e-05],
        [8415693786.671909, 4.5454146334880214e-07],
        [14551658.192618812, -3.150664822268111e-10],
        [16901.601160242404, 1.513741459264402e-12],
        [13.198359109922645, 6.81843672050603e-16],
        [0.006869688560178636, -3.919987176216461e-20],
        [2.336459347047364e-06, 7.337524104030574e-23],
        [5.01109748765163e-10, -3.049870401656497e-26],
        [6.369581808325286e-14, -5.023799321618167e-30],
        [4.26446525046081e-18, 4.163686937233803e-36],
        [1.1245775369941899e-22, -2.2024096934304298e-39],
    ],
    &[
        [5.244580780358195e+22, 3759212.2731533046],
        [3.521902124268131e+21, 235581.62595063943],
        [9.016279797110568e+19, -4974.49874481354],
        [1.19312229591803e+18, -74.22486246166966],
        [9266286333405022.0, -0.03637732791699228],
        [45234346356358.66, 6.509259696477094e-05],
        [144575028257.21826, 5.902065923662654e-06],
        [310068982.63054484, -1.8002977778997645e-08],
        [452306.03039179277, 2.5730430080361237e-11],
        [450.9116360642921, -2.025368875419931e-15],
        [0.30622695766386404, 2.124687876760909e-17],
        [0.00014002338877940225, 2.8955400790894674e-21],
        [4.215823570092692e-08, -2.338349923262563e-24],
        [8.049174828997993e-12, -2.4801677409538988e-28],
        [9.142615279906925e-16, 3.0791643126751264e-33],
        [5.481098097307226e-20, -1.7263840480522272e-36],
        [1.294743874828837e-24, -3.502358488178363e-41],
    ],
    &[
        [2.3055384829264997e+23, 2232923.089287439],
        [1.8790537299537552e+22, -339540.51189775753],
        [5.812820964937292e+20, -4282.231864288356],
        [9.28601623358976e+18, -616.2742497253204],
        [8.719283613581363e+16, 0.5799856855081827],
        [516418407065083.4, 0.012009826178252768],
        [2013502976830.3857, -2.2017422992924727e-05],
        [5307626949.490059, 3.595149127723805e-07],
        [9610444.639956111, 8.192116225268038e-10],
        [12045.706598263898, 4.300974612978653e-13],
        [10.45817153034041, 2.230621637936806e-16],
        [0.006250045283972219, -2.0774927866250804e-19],
        [2.5349653830721238e-06, 4.1700635808922724e-23],
        [6.810317981056206e-10, 5.02785488038674e-26],
        [1.16510768796007e-13, -1.2145238213488525e-29],
        [1.1888295854628474e-17, 2.4660758202683655e-34],
        [6.408404169744338e-22, -3.540538475224541e-38],
        [1.3600250786017196e-26, -6.572923711048423e-43],
    ],
    &[
        [8.370687881139759e+23, -29818491.083544124],
        [8.28248226457229e+22, 6300472.178066164],
        [3.0927186978665356e+21, 66874.87419605706],
        [5.951527193320142e+19, -3818.7836337222834],
        [6.734716913186967e+17, -32.91504870618028],
        [4818635308404403.0, 0.05145089089386697],
        [22791259073129.8, -0.0018107020312854046],
        [73314634850.29787, 6.6011890481665365e-06],
        [163281418.43003398, 1.062998148348021e-08],
        [254308.3115490487, 6.551692699160746e-12],
        [277.9789462463859, 3.6428872797840415e-15],
        [0.21273349850825868, 5.209114633949729e-18],
        [0.00011299236493872376, 4.953634009252373e-21],
        [4.098678796944766e-08, 6.374278180718193e-25],
        [9.892746383628927e-12, 1.1437094623172828e-28],
        [1.5250368787079602e-15, 8.243251885812634e-32],
        [1.4041707808165204e-19, -7.595574865568509e-36],
        [6.829128958131809e-24, -7.177832897570915e-40],
        [1.3050745703753873e-28, 7.235703213296815e-45],
    ],
    &[
        [2.497965050015285e+24, 49093835.28745409],
        [3.0036750826301934e+23, 12678805.476285467],
        [1.3533201312828138e+22, 64257.50345194423],
        [3.1327476433938186e+20, -20595.817112638615],
        [4.2623043083327427e+18, 111.36287065955842],
        [3.672032405701598e+16, 0.39335769412756694],
        [209775375631306.7, -0.014099579114943106],
        [818869481130.608, -3.018763037693923e-05],
        [2227183043.5622735, 2.7151776251642343e-08],
        [4271215.508107968, -4.246677468822642e-10],
        [5809.488411197713, 1.2330469525486307e-13],
        [5.606778752304306, 6.882625927183568e-18],
        [0.003820939525247679, -3.460391961946407e-22],
        [1.819139421329909e-06, -9.280112377555768e-23],
        [5.943721930235249e-10, -2.9422922668513716e-26],
        [1.296528081130654e-13, 1.170360765156869e-29],
        [1.8097391248047134e-17, -3.672561424242315e-35],
        [1.5093946738701378e-21, 4.0431635111310516e-38],
        [6.641598900786904e-26, -5.7132434925635244e-42],
        [1.1448022547152522e-30, -6.252286005291719e-47],
    ],
    &[
        [6.089889978153905e+24, -410183425.1186114],
        [8.913839244547002e+23, 4334743.294963652],
        [4.847223874273884e+22, -2602661.9839338437],
        [1.3487916935754353e+21, 82464.1137594464],
        [2.203008894310868e+19, -21.148592421878472],
        [2.2797972731389978e+17, 14.970033918981926],
        [1567885787817415.8, 0.06135933382794582],
        [7394803439051.15, 0.00028329106107203433],
        [24425100938.801712, 9.29452607395395e-07],
        [57267421.29640812, 3.39994749716745e-09],
        [96045.48244607971, -6.635490652986787e-12],
        [115.53652976026068, -6.495076282998457e-15],
        [0.09948956721729971, 1.5297309439096272e-18],
        [6.09100536979392e-05, 3.13645447991812e-23],
        [2.6187101635377172e-08, -1.5282238319059441e-24],
        [7.755081222633912e-12, 6.743511380719033e-28],
        [1.5367920054198707e-15, -5.375448643995893e-32],
        [1.9505202077088883e-19, -9.872105283853704e-36],
        [1.478408008986965e-23, -1.4398318853674041e-39],
        [5.898620617473514e-28, 7.121693731456214e-45],
        [9.180018080263814e-33, 3.455306776021602e-49],
    ],
    &[
        [1.2038912278259981e+25, -1032291160.1402878],
        [2.149962699496406e+24, 124622674.98599374],
        [1.4122641993653783e+23, 2459756.672740035],
        [4.723490317524528e+21, -222143.1909763898],
        [9.253743397894427e+19, 5506.981079627018],
        [1.1484749810832682e+18, -22.927332010809476],
        [9485799088584750.0, -0.2336428586747572],
        [53878971194229.89, -0.003464912463498686],
        [215194870673.6221, -9.719840687105359e-06],
        [613443046.7452203, -1.5490672842948603e-09],
        [1259655.1473789595, 6.041876873672323e-11],
        [1871.661140917388, 7.92979978905526e-14],
        [2.012870970557181, 1.6663598196837926e-16],
        [0.0015606581820425674, -3.167468677716038e-20],
        [8.650161750285515e-07, -1.7025141614379384e-23],
        [3.3804132603763807e-10, -8.113019019884911e-27],
        [9.123808809794899e-14, -6.018114258214261e-30],
        [1.650075565266713e-17, -8.66997833670196e-34],
        [1.911342256180729e-21, -6.716927832179668e-38],
        [1.3201625168568413e-25, -9.295825926748763e-42],
        [4.784111730114076e-30, 2.8135347566076122e-46],
        [6.725287970889241e-35, 6.124522784844325e-52],
    ],
    &[
        [1.9124547572836107e+25, 776808755.4326228],
        [4.179251613302189e+24, 203416989.4939722],
        [3.321036065597364e+23, -18707898.871332735],
        [1.335834163127731e+22, 447564.12466824887],
        [3.138417282355975e+20, -20075.81360323863],
        [4.667289591756341e+18, -19.32191318789206],
        [4.622470335910976e+16, 1.4810493678329517],
        [315459917814965.4, 0.0015800778902495352],
        [1518704811338.8264, -2.952099054160494e-05],
        [5241494546.904625, 1.017084974679961e-07],
        [13105965.285110291, -8.250702566106288e-10],
        [23885.42608183584, 1.3110267127709356e-12],
        [31.79390899642357, 5.510294310215102e-16],
        [0.03085774252593725, -1.2669837846700201e-18],
        [2.1715693891612485e-05, 9.364510919564276e-22],
        [1.0971776845956387e-08, 2.3931150404407573e-25],
        [3.920270852677437e-12, -4.017161638555335e-28],
        [9.691308682642957e-16, 5.391887156102965e-32],
        [1.6061520063364991e-19, 9.597389439025648e-36],
        [1.703411139958757e-23, 4.8590134379228e-42],
        [1.0745898301321361e-27, -4.107141984522528e-44],
        [3.5411608205542543e-32, -2.3947752368670376e-48],
        [4.495513349524894e-37, -3.521143104089838e-53],
    ],
    &[
        [2.4148831768099817e+25, -1771363747.26427],
        [6.480718252506956e+24, -24467088.723111715],
        [6.242838993230805e+23, -59779873.9659819],
        [3.0234175546382963e+22, 345968.9385735186],
        [8.522472648048593e+20, 11661.553706443337],
        [1.5184580148747917e+19, 76.16015924219995],
        [1.8018905302261936e+17, 4.141765482348529],
        [1475330469250410.2, -0.08612716939471043],
        [8542285632924.0625, 0.00015357715587642509],
        [35584196042.35586, 1.2411018965765014e-06],
        [107900244.69799678, 2.8324313631660034e-09],
        [239908.93727917268, 1.0715951928214467e-11],
        [392.53034037298823, -2.2447232197416365e-14],
        [0.47265646393591615, -2.242989426250148e-17],
        [0.0004174650800469637, -2.54873355437097e-20],
        [2.6857758392132187e-07, -1.6639216823119313e-23],
        [1.2446656608393736e-10, -1.2860707312386285e-26],
        [4.0878516754340624e-14, 1.0588849470656569e-30],
        [9.297655484946117e-18, -6.721093515004678e-34],
        [1.4172721615694056e-21, 5.578528432008134e-39],
        [1.380104779648411e-25, -1.0262018533790958e-41],
        [7.966684887690635e-30, 5.132750079090835e-46],
        [2.3889382715042763e-34, -8.912506893913092e-51],
        [2.7363994301455874e-39, 1.3973824479723414e-55],
    ],
    &[
        [2.3923777261540843e+25, 1542516509.9428594],
        [7.918203599923352e+24, 404083656.661307],
        [9.27124347327564e+23, 37166468.8058358],
        [5.415971601507336e+22, 2492677.107809187],
        [1.833794770923456e+21, -103362.1800481145],
        [3.916623847378839e+19, -1782.947093369437],
        [5.5685420143079424e+17, -15.087313085224627],
        [5466578948225350.0, 0.16306440640139788],
        [38017893938533.94, -0.0019972377485464156],
        [190755386525.68674, 1.5067187201601854e-05],
        [699387851.1103542, 2.0116082629420567e-08],
        [1889625.2020060248, 2.623413764606587e-11],
        [3780.4474990053486, 3.282117743409033e-14],
        [5.609291781129463, 1.8838830998817352e-16],
        [0.0061632525302835195, 6.272762463389647e-20],
        [4.9912179586743355e-06, -3.065306799333322e-22],
        [2.9548701297208573e-09, -1.0840703777947556e-25],
        [1.2631897447831218e-12, -6.706347555978679e-29],
        [3.8321108796031855e-16, 1.1478816871059314e-32],
        [8.052309240915996e-20, 2.1781567361529337e-36],
        [1.1327353059240009e-23, 6.676658553659795e-40],
        [1.0152982930241788e-27, -4.462986166955911e-44],
        [5.370840126350724e-32, 1.0070918149423068e-48],
        [1.4657909808038618e-36, 6.300511867835376e-53],
        [1.5124656714240068e-41, -9.095955150340398e-58],
    ],
    &[
        [1.8304896504520168e+25, 599170074.2079471],
        [7.509378400968944e+24, -264124732.59545353],
        [1.0723538331817521e+24, 929844.1739426922],
        [7.575121685978186e+22, -2325670.816511213],
        [3.0866018206707656e+21, -208469.83021398494],
        [7.912766628930737e+19, -863.7740579481335],
        [1.3489159245592223e+18, 123.97851294930928],
        [1.587991366292566e+16, 0.6715904883563905],
        [132592629861962.62, 0.005784234117542755],
        [800446627634.3977, -5.4824015540236716e-05],
        [3541900986.87783, -2.067129931275569e-07],
        [11596561.23610862, -4.4707721800091487e-10],
        [28260.624753439293, 1.1894335580698385e-12],
        [51.40759476465264, -1.845253317468217e-15],
        [0.0697994335430681, 3.540702910996902e-18],
        [7.053473199425515e-05, -6.108249110257303e-21],
        [5.273729799914509e-08, 3.996294637309294e-25],
        [2.8904129530874995e-11, 1.3719269154266343e-27],
        [1.1458629488792446e-14, -6.425989716783302e-31],
        [3.225600234413774e-18, 1.7354577563502903e-35],
        [6.285868069473064e-22, 3.872642001159751e-38],
        [8.18534301767905e-26, 8.669738786049571e-45],
        [6.768047688115995e-30, -8.450151164722188e-47],
        [3.284576962441969e-34, 4.675573869314135e-51],
        [8.155789346414602e-39, 1.3606847252810808e-55],
        [7.562328357120033e-44, 6.295711360102707e-61],
    ],
    &[
        [1.0613280052621428e+25, -610528513.5357428],
        [5.428230316266972e+24, 66319298.91325096],
        [9.493658866133721e+23, 52420225.08720818],
        [8.136488186190958e+22, 5667614.414806308],
        [4.000401547137493e+21, 215191.4434733669],
        [1.233537736575864e+20, 2387.234062756324],
        [2.5253182345864136e+18, -61.14057573050854],
        [3.568713013695456e+16, 1.6934836315907924],
        [357911431030400.94, 0.030345870671946003],
        [2599184208386.0005, 6.1362816945786e-05],
        [13868490386.903687, -6.280327622712885e-07],
        [54934293.30522561, -1.4173828862796009e-09],
        [162657.6052437491, 1.4461929946694186e-11],
        [361.4331817270063, -1.42299740997026e-14],
        [0.6034446747557172, 5.2497844773171726e-17],
        [0.0007559656199676642, -1.9518107511272433e-20],
        [7.077165863736621e-07, -3.8575951781737406e-23],
        [4.916832010084077e-10, -3.842028195739639e-26],
        [2.5090345014061555e-13, 8.177237180550915e-30],
        [9.270252610304317e-17, 7.235510222276173e-34],
        [2.4319598171934904e-20, -3.1012130923335044e-37],
        [4.411252997497215e-24, 2.8082136637458573e-40],
        [5.332661543193938e-28, 2.872748829897193e-44],
        [4.075516217651237e-32, -3.5390384709490564e-49],
        [1.8159517655200985e-36, -9.250344755285781e-53],
        [4.0988825324361475e-41, 3.0159399630838335e-58],
        [3.403666609178411e-46, 3.342833695452212e-63],
    ],
    &[
        [4.556054594340024e+24, -84467906.1543654],
        [2.9250443706403605e+24, 158487809.4273916],
        [6.297781122824696e+23, 61556448.70489735],
        [6.576522279882343e+22, -1222349.78191865],
        [3.91566447060913e+21, 114955.18053684174],
        [1.4567067494055689e+20, -5193.793324756678],
        [3.5902293648439276e+18, 108.75225418406123],
        [6.102287343249198e+16, -2.128898683895728],
        [736119500621946.2, -0.00655722759631025],
        [6435756062692.584, 0.0003867290118336286],
        [41413502791.15164, -3.1691334747574575e-06],
        [198349519.27811253, 1.2583819351458574e-08],
        [712597.5793629504, -1.4547267674899353e-11],
        [1929.7749781907808, 1.0178475569436609e-13],
        [3.94843289747661, 1.4257754742470763e-16],
        [0.006103092286501649, 2.8860436467069116e-19],
        [7.108553832524599e-06, 4.02282564136205e-23],
        [6.207395660121976e-09, -3.552119486344116e-25],
        [4.031752035749094e-12, -2.7388251210058037e-28],
        [1.9259883291143394e-15, 1.1986745207114546e-31],
        [6.664036783781009e-19, -3.05480283088912e-35],
        [1.6360750781852615e-22, -4.718976624207374e-39],
        [2.7719331154612707e-26, -8.276885964011093e-43],
        [3.1193450800340965e-30, 9.067221575626428e-47],
        [2.2074154932222438e-34, -1.8062142324025547e-50],
        [9.034697370396995e-39, -1.2511653952947736e-55],
        [1.851026797073705e-43, 1.8219920803612567e-60],
        [1.3702361550637726e-48, 5.798418279272635e-65],
    ],
    &[
        [1.4070279032724526e+24, -113072776.86487001],
        [1.1431005973849133e+24, -20509892.352051295],
        [3.049221261466456e+23, 30406762.65062081],
        [3.900970294559804e+22, 215626.6218262252],
        [2.826111477538997e+21, 71769.14843287185],
        [1.2737113473015202e+20, -3924.246451157719],
        [3.7927379926387016e+18, 176.0322242868434],
        [7.776724374071067e+16, -6.077203180563472],
        [1131080241395288.5, 0.04886512111578636],
        [11926865261272.234, -0.0006293652226108688],
        [92669973675.98206, -2.9166430495760526e-06],
        [536945364.4775525, 2.945593645969475e-08],
        [2340076.7486249264, -1.0128043114925363e-10],
        [7715.122938218403, -2.8533475110802505e-14],
        [19.30609574737642, -1.389929907943806e-15],
        [0.036704123408413176, 2.5089108419713504e-18],
        [5.294978118196704e-05, -1.2731826677326292e-21],
        [5.775745760993159e-08, 9.11002753576887e-25],
        [4.7352113688092004e-11, -2.1122776579648714e-27],
        [2.8922463177868226e-14, -1.510427250065695e-30],
        [1.300256423494362e-17, -1.1500066936005915e-34],
        [4.233087167899178e-21, -2.079043160915784e-37],
        [9.765916510630329e-25, -1.4943958412411336e-41],
        [1.5508558862861958e-28, 5.2105586020674976e-45],
        [1.628976073618207e-32, -1.2407035954662906e-48],
        [1.0691406556313835e-36, -4.823234088846797e-53],
        [4.0202372590843505e-41, -7.503997466147228e-59],
        [7.460593305283476e-46, -1.149336091450016e-62],
        [4.893700553799188e-51, -2.846483911456812e-67],
    ],
    &[
        [3.014918903607551e+23, 6310681.246309454],
        [3.129790446824265e+23, -32885976.682925414],
        [1.0426569649954959e+23, -3415268.5051714275],
        [1.6456599266224863e+22, -815254.1944421199],
        [1.4596985588044847e+21, -96829.68926242676],
        [8.014143835998606e+19, 2635.5894516357785],
        [2.8972503594238495e+18, -46.739020625615794],
        [7.196922069389112e+16, 1.7439899035562447],
        [1266658721345225.2, -0.03474610880742447],
        [16157664982892.215, 0.00014822896394177658],
        [151945510908.98312, -6.509638567349165e-06],
        [1066879430.2412858, 2.058234555820354e-11],
        [5645790.497315691, -3.458559068108059e-10],
        [22665.74104715368, -7.021748467774225e-13],
        [69.31975276983617, 1.4970211704971281e-15],
        [0.16182323313073285, 7.670485098617225e-18],
        [0.00028831650819333707, 3.0855954402430417e-21],
        [3.9118560783310047e-07, 8.729425883576456e-24],
        [4.02407936354862e-10, 1.546526195162809e-26],
        [3.1171281766418085e-13, -5.30986247121552e-30],
        [1.800816173978101e-16, 1.110619169570684e-32],
        [7.659023440415442e-20, 8.099551400385592e-37],
        [2.3571888462401955e-23, 6.0676608910655704e-40],
        [5.131534634573894e-27, 2.7714104284897796e-43],
        [7.665049201199651e-31, 2.784262955016035e-47],
        [7.535345938609043e-35, -1.1358422593098309e-51],
        [4.594363196624469e-39, -1.4154005880638294e-55],
        [1.5871096635645916e-43, 7.577495408046264e-60],
        [2.6602823533255176e-48, 7.683710900842787e-65],
        [1.534075408714479e-53, -8.051076646254719e-70],
    ],
    &[
        [4.278231778846461e+22, -78020.86545753958],
        [5.74363332320583e+22, -1361926.1047982082],
        [2.4142382302006193e+22, -239866.71961506055],
        [4.74398480990602e+21, 504054.7150875678],
        [5.1941629867729145e+20, -16435.241191530302],
        [3.4994691347793904e+19, -817.3334192283336],
        [1.5460491106115584e+18, 67.70587290902407],
        [4.679811547517383e+16, -0.2529046386861742],
        [1001792362969459.5, -0.04616561992604774],
        [15527497630172.324, 2.8590483691546335e-05],
        [177388008035.30295, 6.613191128743319e-07],
        [1513902775.0490434, -1.001339787564255e-08],
        [9750079.878197607, 1.3059596798663278e-10],
        [47735.360107550325, 1.7044532612298342e-12],
        [178.5472735260501, -1.0737164183635172e-14],
        [0.5116687332061111, 1.2433580604602672e-17],
        [0.0011244243532674038, -4.1878717780328845e-20],
        [1.8928615241273585e-06, 9.207580692788725e-23],
        [2.4335052467958708e-09, 1.0069496464216143e-25],
        [2.3769506419724366e-12, 1.1377039722184033e-28],
        [1.7506150744251379e-15, 5.086537321213763e-32],
        [9.621289199919536e-19, -6.899221952266267e-35],
        [3.891812905166406e-22, -1.2829938433933097e-38],
        [1.1377967852977259e-25, -4.718389625508261e-42],
        [2.3474193386137047e-29, -1.1978616241558315e-45],
        [3.3103762627181264e-33, -3.0289586581438704e-51],
        [3.0546970060078156e-37, -8.324028308644562e-54],
        [1.7331429581791807e-41, 5.053868265967819e-58],
        [5.499109473387749e-46, -4.377529377353789e-63],
        [8.295616828126074e-51, -2.4265584074038047e-67],
        [4.162220101163315e-56, -3.111028267127347e-72],
    ],
    &[
        [3.7790747674306376e+21, -59843.87738231699],
        [6.663647494025692e+21, -466961.28608428215],
        [3.58207461621123e+21, 75746.22030989644],
        [8.869659436919137e+20, -6776.087552574597],
        [1.2118510303306431e+20, -6112.754860811692],
        [1.0117710986527873e+19, 557.8355287900524],
        [5.5108998481270586e+17, -25.173003746180513],
        [2.048809936643985e+16, 1.2756912247984722],
        [537207767580309.75, -0.018186994614704438],
        [10180432655270.998, 0.0009193878075995738],
        [142052420624.73172, 1.4664689029733501e-05],
        [1480368351.9469652, 6.826888394020398e-08],
        [11647574.536970856, 2.2878564969370234e-10],
        [69751.69751148649, 2.242521154086924e-12],
        [319.76013657047355, 1.7127645651702846e-14],
        [1.1262841243696267, -6.759034894575505e-17],
        [0.003053569009167621, -1.5769013283977408e-19],
        [6.372289293726248e-06, 1.1617874779799072e-24],
        [1.0216662132119484e-08, -2.3462912091212316e-25],
        [1.2537555664564822e-11, -6.433582379661856e-28],
        [1.1707361534631606e-14, 7.671994440786936e-32],
        [8.250093302814499e-18, 2.5931535060228437e-34],
        [4.338997664079515e-21, -1.6162759480293494e-37],
        [1.67844240995228e-24, -1.0151363427521898e-40],
        [4.685073035696782e-28, -1.4406570136711916e-44],
        [9.202857713035135e-32, 4.3361380549253114e-48],
        [1.230236404397523e-35, 6.652092892216587e-52],
        [1.0690413840881302e-39, -1.5033500837691117e-56],
        [5.655496164841651e-44, 1.5717718945196772e-60],
        [1.6478511487979858e-48, 7.57727410989256e-66],
        [2.2273080316350187e-53, 2.2585839594551517e-69],
        [9.590368896689667e-59, -8.472369146437826e-75],
    ],
    &[
        [1.9072966036432477e+20, -16326.860339965548],
        [4.510782039967958e+20, -29104.590306952225],
        [3.159026626484596e+20, -8373.870499229692],
        [1.0021501830647592e+20, 494.4548684370155],
        [1.7342301961163102e+19, -84.62420284534541],
        [1.818426690394087e+18, -39.959071583944436],
        [1.2358854536268573e+17, -3.5231705594731433],
        [5704531013056450.0, -0.22049916338018716],
        [184989576284604.62, -0.003011962084436516],
        [4323212781996.8804, 3.068270281317305e-06],
        [74241866032.61208, -4.6392236428626925e-06],
        [951045065.6924387, 2.7684405399746272e-08],
        [9193926.04143109, 3.209831493372449e-11],
        [67668.42864779924, 5.685412502205573e-12],
        [381.67000418116, -1.34352000865838e-14],
        [1.657150690286302, 1.897742120275484e-17],
        [0.0055535187974603195, 2.794316443853613e-19],
        [1.4378575261987643e-05, -5.670424003867893e-22],
        [2.8739152611594808e-08, -1.034445188829475e-24],
        [4.423353907411817e-11, 1.93052159163643e-27],
        [5.219692611776073e-14, 3.14850119011152e-30],
        [4.6918496526355114e-17, -2.08657487096388e-33],
        [3.1841397933960455e-20, -2.1660488794680788e-36],
        [1.612406765316737e-23, -1.243499024956494e-39],
        [5.9994484320585145e-27, -1.5650150092475706e-43],
        [1.607672394372651e-30, -1.7424336965236139e-46],
        [3.0220600928682745e-34, -2.7873484662269044e-52],
        [3.8473023259622066e-38, -2.2925735104722776e-54],
        [3.160555053551447e-42, -1.3534591555838999e-58],
        [1.5630602138554899e-46, -2.124636498124141e-63],
        [4.1826976043053775e-51, 2.7819836092477057e-67],
        [5.0388909262530905e-56, -2.982176267911749e-72],
        [1.8274330976923905e-61, 1.6715572073884835e-77],
    ],
    &[
        [4.849157987978799e+18, 477.4943203050789],
        [1.5857595065872722e+19, -114.53363810974284],
        [1.4863628654734027e+19, -0.49976938462604326],
        [6.18713564755441e+18, -168.41571563162196],
        [1.385239616770947e+18, -57.96395501112341],
        [1.8590848099440234e+17, -7.249887464624331],
        [1.6035111721768724e+16, 0.37039150272751475],
        [932911404839974.1, 0.01946266214865192],
        [37923952775512.58, 0.0022559140332397217],
        [1106183684181.372, -0.00011619121250110353],
        [23629823792.878628, -9.059158820613217e-07],
        [375602983.6688396, -2.9514393935278793e-08],
        [4498161.77220694, -2.144422472902163e-10],
        [40979.64233097211, 3.1227253158331102e-12],
        [286.09476815798166, 1.7090518667718516e-14],
        [1.5387668468155835, 9.552347287498863e-17],
        [0.006398697243402292, -3.3088606614310634e-19],
        [2.0609980544956363e-05, -6.345159994501409e-22],
        [5.1433128995303645e-08, -2.8881063186924372e-24],
        [9.931070154648671e-11, 4.264428611825203e-27],
        [1.4791382830196933e-13, -5.459693558325768e-31],
        [1.691031598270778e-16, -4.557478745505453e-33],
        [1.4736366983413486e-19, 4.863418468324347e-37],
        [9.696845301043465e-23, -5.2827521363977254e-39],
        [4.758731722277448e-26, -1.789203546394634e-42],
        [1.7138584318190664e-29, -3.715264648419567e-46],
        [4.435822353503615e-33, -2.445101894339041e-49],
        [8.026309113529263e-37, 7.432477793435404e-53],
        [9.78478981232313e-41, 5.70557493704401e-57],
        [7.63661905656236e-45, 3.5975214102578506e-61],
        [3.543799719025347e-49, 2.617422211138746e-65],
        [8.718073394156875e-54, 1.62289830277218e-70],
        [9.306279193044236e-59, 4.76740023292612e-75],
        [2.7688380268066524e-64, 2.0187830835194774e-81],
    ],
    &[
        [5.070821876276536e+16, 3.1498666209089037],
        [2.4084117899286464e+17, -9.661223106955074],
        [3.153522602110036e+17, 8.798933708224657],
        [1.787763367235316e+17, -4.347859649514675],
        [5.349583437110981e+16, -0.4917649681506262],
        [9454867879793600.0, 0.21423427793377836],
        [1061229171295127.0, -0.01301969769210136],
        [79563227888912.98, 0.007653869355856325],
        [4134486637543.2705, -2.9166725789330456e-05],
        [153142451332.02704, 7.537671955325847e-06],
        [4131912041.6018157, 5.092854769841282e-08],
        [82600264.84174633, -7.852501815197916e-10],
        [1240010.0827594828, -2.626653350464386e-11],
        [14128.015918503852, -9.048058467222788e-13],
        [123.17562305698824, -4.8388409125159916e-15],
        [0.8269085085015544, 3.587012633114332e-17],
        [0.004293466967405816, -2.8901332216656827e-19],
        [1.729012225949352e-05, 7.923252415174216e-23],
        [5.4072503738946594e-08, -1.5466962874203564e-24],
        [1.3128946365611049e-10, 5.5919343011227074e-27],
        [2.470393800959746e-13, 2.3655169885623365e-29],
        [3.5898145560520442e-16, -1.6870531523958024e-33],
        [4.0071759605399817e-19, 1.1529435368683706e-35],
        [3.410728999320599e-22, 1.2189734883345415e-38],
        [2.191816705744757e-25, -1.3699628175538766e-41],
        [1.0497775952668767e-28, -4.8092666276186854e-46],
        [3.68504128077369e-32, 2.104666279190181e-48],
        [9.275871244413761e-36, 3.3161434277761762e-52],
        [1.62679338203465e-39, -8.592297343430812e-56],
        [1.9122106781924385e-43, -1.4068255751633209e-59],
        [1.4273039265677853e-47, -8.498209573705095e-64],
        [6.2512892336296715e-52, -1.8299820817467702e-68],
        [1.418326149068588e-56, 4.948218868527779e-73],
        [1.3343403179377174e-61, 2.199666209144863e-78],
        [3.132169713582186e-67, 3.1501321317233326e-83],
    ],
    &[
        [148833267383656.4, 0.0021831409044652137],
        [1129020428190174.8, -0.025421495998047293],
        [2235760706059386.5, 0.09636834800800986],
        [1844642686090265.0, -0.11788437153049555],
        [780157217798401.2, 0.04473421492545091],
        [190417511319947.2, 0.004306563262987661],
        [28966091893131.113, -0.001524528942699555],
        [2898142223236.163, 4.5866332517989154e-05],
        [198430102911.59042, -1.4467908383965254e-05],
        [9581993256.789501, 6.36288837134158e-07],
        [334097125.7684236, 3.6503362515627006e-09],
        [8569031.412732612, 2.760662920193595e-10],
        [164085.2489542721, 1.0111951774378249e-11],
        [2373.686966923189, 3.1102076097643947e-14],
        [26.185771468061642, 3.428207801771782e-16],
        [0.22190441351319778, -1.2881633045306656e-17],
        [0.0014524756181641739, 6.970266093589692e-20],
        [7.371709287298828e-06, -5.193081796581389e-23],
        [2.9077452206336165e-08, -1.583682287180818e-24],
        [8.921682442409713e-11, -5.616885503472511e-27],
        [2.1280097929102696e-13, -1.2592484387561803e-29],
        [3.9373860828475993e-16, -7.99838934979453e-33],
        [5.629994154472617e-19, -5.105603557192117e-36],
        [6.186389407487005e-22, 1.6958352821368756e-38],
        [5.1837485572932365e-25, 2.4135235157300787e-41],
        [3.2785625171088495e-28, -3.3117042092740246e-45],
        [1.5444114992156125e-31, -6.102601398345454e-48],
        [5.325571855713095e-35, -3.443574917374307e-51],
        [1.3142848699174437e-38, -7.24144678954674e-55],
        [2.2530106824322076e-42, 5.63890965331101e-59],
        [2.5763991718247194e-46, 1.452361395295879e-62],
        [1.856701213397009e-50, -9.9543940160214e-67],
        [7.750028545951528e-55, -3.962390012742608e-71],
        [1.635158131150864e-59, 9.68845052239232e-76],
        [1.3540658161131515e-64, 1.0691077942331988e-81],
        [2.355014822242245e-70, 1.2896619952324206e-86],
    ],
    &[
        [43603214120.66769, -2.4692623895445885e-06],
        [706880772232.6268, -1.1700236197975237e-05],
        [2621523023586.226, 0.00014314315262494736],
        [3694761703794.669, -6.449259547975222e-05],
        [2498469668851.025, 6.743656227563749e-05],
        [928115503394.9188, -5.642999329029479e-05],
        [206893955924.99524, -1.3327324052477737e-05],
        [29446022109.010635, -1.1135314497038402e-06],
        [2800557492.9916644, -1.256855161292896e-07],
        [184278943.547037, 2.9030288866883777e-09],
        [8619284.587529205, -3.3851227045123243e-10],
        [292781.8074697693, 8.822685219560134e-12],
        [7347.714507194197, -4.491429168132422e-13],
        [138.13236524614064, 9.872354477003776e-15],
        [1.9669439849689008, -3.164135924171889e-17],
        [0.021403032249261586, 3.7072731027107133e-19],
        [0.00017919812460163244, 7.205487489835673e-21],
        [1.1603988247412886e-06, 3.991494423766451e-23],
        [5.832522063296397e-09, 4.0252640916307873e-25],
        [2.280337162670003e-11, -1.518516038158491e-27],
        [6.939514579381519e-14, 5.2400581316923245e-30],
        [1.6425202943642923e-16, 1.1506984656090509e-32],
        [3.0168310172962294e-19, -1.453340078053934e-35],
        [4.282978659878995e-22, -1.2347791039577143e-39],
        [4.672999005669077e-25, 9.726631814375324e-42],
        [3.8875714313101796e-28, -3.628886995301287e-45],
        [2.4404339901886133e-31, 1.9944608528978832e-47],
        [1.1404197845006683e-34, -7.701818043379586e-51],
        [3.897753203104254e-38, 2.324181947369641e-54],
        [9.521581472245495e-42, 1.7272506024545114e-58],
        [1.612373385769557e-45, 6.988169640024172e-63],
        [1.815460533274398e-49, 1.1123674802218399e-66],
        [1.2812130743370386e-53, 1.1094095281321633e-69],
        [5.185111457280686e-58, -1.9975809011282178e-74],
        [1.0385610767477644e-62, -3.1217159285842324e-79],
        [7.704743932124317e-68, -3.547287055670066e-84],
        [8.840145729137557e-74, -1.7161780159876966e-90],
    ],
];

/// (cᵢ, dᵢ) at ν = 0 for i = 0, …, 36, each as hi + lo.
#[rustfmt::skip]
pub(crate) static NU0: [[[f64; 2]; 2]; PADE_ORDER + 1] = [
    [[1.0, 0.0], [1.0, 0.0]],
    [[332.9375, 0.0], [333.0625, 0.0]],
    [[51687.20703125, 0.0], [51728.76953125, 1.8217323195710254e-29]],
    [[4977808.938964844, 0.0], [4984251.689941406, -9.175820186784625e-29]],
    [[333779174.0955963, 0.0], [334398592.6598053, 2.414244985765201e-25]],
    [[16580123985.250168, 0.0], [16621577105.737381, -1.813861368746365e-23]],
    [[633860327048.9248, -4.9591064453125e-05], [635914871117.1709, 2.861022949218753e-06]],
    [[19128142701645.176, 0.0009781122207641602], [19206487300543.773, 0.0002940893173217774]],
    [[463718607030234.8, 0.0088155847042799], [466075886178508.06, -0.030185045674443245]],
    [[9144403719700838.0, -0.6913183471333468], [9201357534164764.0, 0.044217887349077514]],
    [[1.4799254731152483e+17, 2.060649141451904], [1.4911128504025936e+17, -14.104861914834146]],
    [[1.9779791662702574e+18, -118.89040871300597], [1.996003224272416e+18, -115.08330005278538]],
    [[2.1923969925323407e+19, 795.3893287764523], [2.2163611621979824e+19, -1225.5566232808007]],
    [[2.020323362426225e+20, -7091.4451122427445], [2.046724288629752e+20, -2841.974817296933]],
    [[1.5495100885989862e+21, 59930.22643910861], [1.5736670843282658e+21, 127553.70118910332]],
    [[9.889079839411845e+21, -777074.3924554979], [1.0072825949256359e+22, -948498.6281645758]],
    [[5.244580780358195e+22, 3759212.2731533046], [5.3607148956095825e+22, -3834590.822505799]],
    [[2.3055384829264997e+23, 2232923.089287439], [2.3664290282352173e+23, -1630508.8693073748]],
    [[8.370687881139759e+23, -29818491.083544124], [8.634776829162821e+23, 43161982.314379565]],
    [[2.497965050015285e+24, 49093835.28745409], [2.5923266401587504e+24, 173436831.711372]],
    [[6.089889978153905e+24, -410183425.1186114], [6.36617951430495e+24, -20731399.029561136]],
    [[1.2038912278259981e+25, -1032291160.1402878], [1.2697380020289543e+25, 1026493254.3751061]],
    [[1.9124547572836107e+25, 776808755.4326228], [2.0391347258519805e+25, 1189858969.3183105]],
    [[2.4148831768099817e+25, -1771363747.26427], [2.6096491589327414e+25, -1621902195.7719796]],
    [[2.3923777261540843e+25, 1542516509.9428594], [2.6287888051876687e+25, 1618928026.6442335]],
    [[1.8304896504520168e+25, 599170074.2079471], [2.053741254052866e+25, 2070093888.8158073]],
    [[1.0613280052621428e+25, -610528513.5357428], [1.2224550283688246e+25, -791401700.7320802]],
    [[4.556054594340024e+24, -84467906.1543654], [5.425751484608007e+24, 527967187.9866673]],
    [[1.4070279032724526e+24, -113072776.86487001], [1.7488359695924025e+24, -56077603.215011716]],
    [[3.014918903607551e+23, 6310681.246309454], [3.960921592572134e+23, 8757044.81415487]],
    [[4.278231778846461e+22, -78020.86545753958], [6.045011151454565e+22, 1531551.5021602635]],
    [[3.7790747674306376e+21, -59843.87738231699], [5.884832284538142e+21, 347214.9377103021]],
    [[1.9072966036432477e+20, -16326.860339965548], [3.3920765359618674e+20, 6726.79395147988]],
    [[4.849157987978799e+18, 477.4943203050789], [1.0407507553519366e+19, -91.50064012504915]],
    [[5.070821876276536e+16, 3.1498666209089037], [1.4422168272693693e+17, -11.548510001732863]],
    [[148833267383656.4, 0.0021831409044652137], [677733471461169.8, -0.029833223692353687]],
    [[43603214120.66769, -2.4692623895445885e-06], [572410026571.9338, 4.7385368503079655e-05]],
];

/// (cᵢ, dᵢ) at ν = 1 for i = 0, …, 36, each as hi + lo.
#[rustfmt::skip]
pub(crate) static NU1: [[[f64; 2]; 2]; PADE_ORDER + 1] = [
    [[1.0, 0.0], [1.0, 0.0]],
    [[333.1875, 0.0], [332.8125, 0.0]],
    [[51773.61328125, 9.167426535283243e-32], [51648.92578125, 1.81892046185222e-29]],
    [[4991706.804199219, -1.0544533401678339e-29], [4972377.355957031, -9.153959983838146e-29]],
    [[335163292.5235748, -1.6414622682631584e-27], [333304669.64149475, 2.4063472307514527e-25]],
    [[16675929570.219955, 2.9981304347099384e-26], [16551517771.255875, -1.8062160099739882e-23]],
    [[638764595507.2825, -6.103515625e-05], [632596332976.9639, 1.0490417480468753e-05]],
    [[19321036377447.23, 0.0005170106887817383], [19085718909702.72, -0.0017586946487426758]],
    [[469697714310273.6, -0.010100604966282845], [462613051639916.8, 0.029419301077723503]],
    [[9293055393308858.0, -0.046697264959220774], [9121749538195062.0, -0.3123290590447141]],
    [[1.509940567749543e+17, 15.170322313607358], [1.4762574297261043e+17, 3.848860246210279]],
    [[2.0276393295236762e+18, -67.9955191166988], [1.9733037820734016e+18, -7.9073721121488925]],
    [[2.2601422537395778e+19, 1342.9941891163494], [2.187785998140635e+19, 820.0911655769694]],
    [[2.09683929604003e+20, -11744.413784498336], [2.0169703990550394e+20, 10317.5327841846]],
    [[1.621237933931513e+21, 60113.32634245412], [1.547982048851034e+21, -113292.40993493916]],
    [[1.0447698695156555e+22, 937588.6192740548], [9.888847393105558e+21, -1026934.8176044922]],
    [[5.605907515978267e+22, -397437.1073582421], [5.251417108633152e+22, 1852921.7625978552]],
    [[2.499350414161882e+23, 628168.725029095], [2.3126645197420683e+23, 7027771.388331416]],
    [[9.2304652304269e+23, -65742863.64829365], [8.416405233904752e+23, -12380391.611379243]],
    [[2.8121833335907013e+24, -261324690.3428961], [2.519384461464909e+24, 201353344.5843582]],
    [[7.031117192688895e+24, -157300569.69369996], [6.16684708332867e+24, 534649313.1435758]],
    [[1.4334918583459303e+25, 166096777.22499827], [1.2254632024563383e+25, -135190963.47109935]],
    [[2.3649579689888827e+25, -1031055341.8309643], [1.959840048045982e+25, 794374403.8017346]],
    [[3.128493570899415e+25, 383280556.061917], [2.4962397481524803e+25, 1303102049.6144266]],
    [[3.282513844817522e+25, 600327648.4639953], [2.5007503854525007e+25, 1664283706.6615615]],
    [[2.696554704994684e+25, 1619645551.2603478], [1.941207486707504e+25, -1161599840.543963]],
    [[1.7076367454050367e+25, -838319673.0700995], [1.1467341689582481e+25, 426648228.4806275]],
    [[8.180707287202062e+24, 476660454.7730218], [5.043506761621925e+24, -488413455.362687]],
    [[2.8970176840102153e+24, -38496260.63083936], [1.6076177802669887e+24, -115416470.49685648]],
    [[7.367360413086699e+23, 60447613.143805474], [3.590682346207616e+23, -32510680.786523588]],
    [[1.2966102298718506e+23, -2719827.6679782057], [5.382544175952695e+22, -2428400.224103875]],
    [[1.504363776099499e+22, -441105.3139116421], [5.115897402259186e+21, 262069.1123403575]],
    [[1.0772157564319802e+21, 22560.416451939873], [2.851371932471059e+20, 10510.557804793174]],
    [[4.334567253117834e+19, 2054.900502594273], [8.316501469707256e+18, 170.02460263980092]],
    [[8.497737811851081e+17, -38.512196743894506], [1.0583782978982651e+17, -7.754777398531945]],
    [[6360904405887009.0, 0.27904905353664006], [417780907065104.6, -0.002979384467889259]],
    [[10732687620004.908, 9.527783081767925e-05], [196030831017.78558, -6.34678090647957e-06]],
];
